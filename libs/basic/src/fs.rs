// Copyright (c) 2022 Huawei Technologies Co.,Ltd. All rights reserved.
//
// sysMaster is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan
// PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//         http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
// KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
// NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! the utils of the path operation
use crate::error::*;
use libc::mode_t;
use nix::errno::Errno;
use nix::sys::stat::Mode;
use nix::unistd::{access, mkdir, symlinkat, AccessFlags};
use std::path::{Path, PathBuf};

/// check whether the calling process is allowed to execute the file
pub fn access_executable(path: &Path) -> Result<()> {
    access(path, AccessFlags::X_OK).context(NixSnafu)
}

/// mkdir -p with the given directory mode
///
/// Directories that already exist are left untouched, their mode included.
pub fn mkdir_p(path: &Path, mode: mode_t) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::Invalid {
            what: "empty path".to_string(),
        });
    }

    let mode = Mode::from_bits_truncate(mode);
    let missing: Vec<PathBuf> = path
        .ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && !p.is_dir())
        .map(Path::to_path_buf)
        .collect();

    // mkdir -p up to down
    for dir in missing.iter().rev() {
        match mkdir(dir.as_path(), mode) {
            Ok(()) | Err(Errno::EEXIST) => {}
            Err(e) => return Err(Error::Nix { source: e }),
        }
    }

    if !path.is_dir() {
        return Err(Error::Nix {
            source: Errno::ENOTDIR,
        });
    }

    Ok(())
}

/// create the parent directories of path with the given mode
pub fn mkdir_parents(path: &Path, mode: mode_t) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => mkdir_p(parent, mode),
        _ => Ok(()),
    }
}

/// create symlink link -> target
/* Please don't use "from/to", use "symlink/target" to name path.
 * Take "A -> B" for example, A is "link", B is "target".
 * An existing link is never replaced, the caller sees EEXIST. */
pub fn symlink(target: &Path, link: &Path) -> Result<()> {
    symlinkat(target, None, link).context(NixSnafu)?;
    log::debug!(
        "Successfully created symlink: {} -> {}",
        link.display(),
        target.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn errno_of(r: Result<()>) -> i32 {
        r.unwrap_err().get_errno()
    }

    #[test]
    fn test_access_executable() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("test.exec");
        File::create(&file).unwrap();

        fs::set_permissions(&file, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(access_executable(&file).is_ok());

        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();
        assert_eq!(errno_of(access_executable(&file)), libc::EACCES);

        let missing = dir.path().join("missing");
        assert_eq!(errno_of(access_executable(&missing)), libc::ENOENT);
    }

    #[test]
    fn test_mkdir_p() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("a/b/c");
        mkdir_p(&deep, 0o755).unwrap();
        assert!(deep.is_dir());

        let mode = fs::metadata(&deep).unwrap().permissions().mode();
        assert_eq!(mode & 0o700, 0o700);

        /* Again, everything exists already. */
        mkdir_p(&deep, 0o755).unwrap();

        let odd = dir.path().join("a////d/e//");
        mkdir_p(&odd, 0o755).unwrap();
        assert!(dir.path().join("a/d/e").is_dir());
    }

    #[test]
    fn test_mkdir_p_through_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain");
        File::create(&file).unwrap();

        assert_eq!(errno_of(mkdir_p(&file, 0o755)), libc::ENOTDIR);
        assert_eq!(errno_of(mkdir_p(&file.join("sub"), 0o755)), libc::ENOTDIR);
    }

    #[test]
    fn test_mkdir_p_empty() {
        assert_eq!(errno_of(mkdir_p(Path::new(""), 0o755)), libc::EINVAL);
    }

    #[test]
    fn test_mkdir_parents() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("x.wants/y.service");
        mkdir_parents(&link, 0o755).unwrap();
        assert!(dir.path().join("x.wants").is_dir());
        assert!(!link.exists());

        /* No parent to create. */
        mkdir_parents(Path::new("y.service"), 0o755).unwrap();
        mkdir_parents(Path::new("/"), 0o755).unwrap();
    }

    #[test]
    fn test_symlink() {
        let dir = TempDir::new().unwrap();
        let target = Path::new("/usr/lib/sysmaster/rc-local.service");
        let link = dir.path().join("rc-local.service");

        symlink(target, &link).unwrap();
        assert_eq!(fs::read_link(&link).unwrap(), target);

        assert_eq!(errno_of(symlink(target, &link)), libc::EEXIST);

        let orphan = dir.path().join("missing/rc-local.service");
        assert_eq!(errno_of(symlink(target, &orphan)), libc::ENOENT);
    }
}
