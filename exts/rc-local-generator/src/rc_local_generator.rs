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

use crate::config::{GeneratorConfig, LegacyScript};
use basic::fs::{access_executable, mkdir_parents, symlink};
use basic::{Error, Result};
use nix::errno::Errno;
use std::path::Path;

const WANTS_DIR_MODE: libc::mode_t = 0o755;

/// Result of checking a legacy script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    Executable,
    Missing,
    /// exists, but access(X_OK) failed with this errno
    Inaccessible(Errno),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkOutcome {
    Created,
    Existed,
}

/// What happened to one script/service pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PairOutcome {
    Skipped,
    Linked(LinkOutcome),
}

impl Probe {
    /// Severity a failed check is reported with, a missing script is expected.
    fn log_level(&self) -> Option<log::Level> {
        match self {
            Probe::Executable => None,
            Probe::Missing => Some(log::Level::Debug),
            Probe::Inaccessible(_) => Some(log::Level::Warn),
        }
    }
}

pub(crate) fn probe_executable(script: &Path) -> Probe {
    let errno = match access_executable(script) {
        Ok(()) => return Probe::Executable,
        Err(e) => Errno::from_i32(e.get_errno()),
    };

    let probe = match errno {
        Errno::ENOENT => Probe::Missing,
        _ => Probe::Inaccessible(errno),
    };
    if let Some(level) = probe.log_level() {
        log::log!(
            level,
            "{} is not executable: {}",
            script.display(),
            errno.desc()
        );
    }
    probe
}

/// Make `service` wanted by `target`, linking
/// `<dest>/<target>.wants/<service>` to `<unit_dir>/<service>`.
pub(crate) fn add_symlink(
    unit_dir: &Path,
    dest: &Path,
    service: &str,
    target: &str,
) -> Result<LinkOutcome> {
    if service.is_empty() || target.is_empty() {
        return Err(Error::Invalid {
            what: "service and target must not be empty".to_string(),
        });
    }

    let from = unit_dir.join(service);
    let to = dest.join(format!("{}.wants", target)).join(service);

    /* The symlink call below reports anything that matters. */
    let _ = mkdir_parents(&to, WANTS_DIR_MODE);

    match symlink(&from, &to) {
        Ok(()) => Ok(LinkOutcome::Created),
        Err(Error::Nix {
            source: Errno::EEXIST,
        }) => Ok(LinkOutcome::Existed),
        Err(e) => {
            log::error!("Failed to create symlink {}: {}", to.display(), e);
            Err(e)
        }
    }
}

pub(crate) fn probe_and_link(
    config: &GeneratorConfig,
    script: &LegacyScript,
) -> Result<PairOutcome> {
    if probe_executable(&script.path) != Probe::Executable {
        return Ok(PairOutcome::Skipped);
    }

    log::debug!("Automatically adding {}.", script.service);
    add_symlink(&config.unit_dir, &config.dest, &script.service, &script.target)
        .map(PairOutcome::Linked)
}

/// Handle both legacy scripts.
///
/// The stop script is handled even when the start script failed. If both
/// fail, the start script's error is returned.
pub(crate) fn run(config: &GeneratorConfig) -> Result<(PairOutcome, PairOutcome)> {
    let start = probe_and_link(config, &config.start);
    let stop = probe_and_link(config, &config.stop);

    Ok((start?, stop?))
}
