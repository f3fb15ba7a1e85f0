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

//! What the generator looks at and where it writes to.
use basic::{
    Error, Result, FINAL_TARGET, HALT_LOCAL_SERVICE, MULTI_USER_TARGET, RC_LOCAL_SERVICE,
};
use constants::{
    GENERATOR_DEFAULT_DEST, RC_LOCAL_SCRIPT_PATH_START, RC_LOCAL_SCRIPT_PATH_STOP,
    SYSTEM_DATA_UNIT_DIR,
};
use std::path::PathBuf;

/// A legacy script and the unit it gates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LegacyScript {
    pub(crate) path: PathBuf,
    /// wanted by `target` when `path` is executable
    pub(crate) service: String,
    pub(crate) target: String,
}

impl LegacyScript {
    pub(crate) fn new(path: impl Into<PathBuf>, service: &str, target: &str) -> Self {
        LegacyScript {
            path: path.into(),
            service: service.to_string(),
            target: target.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GeneratorConfig {
    /// the normal generator output directory
    pub(crate) dest: PathBuf,
    /// where the wanted units are installed
    pub(crate) unit_dir: PathBuf,
    pub(crate) start: LegacyScript,
    pub(crate) stop: LegacyScript,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dest: PathBuf::from(GENERATOR_DEFAULT_DEST),
            unit_dir: PathBuf::from(SYSTEM_DATA_UNIT_DIR),
            start: LegacyScript::new(
                RC_LOCAL_SCRIPT_PATH_START,
                RC_LOCAL_SERVICE,
                MULTI_USER_TARGET,
            ),
            stop: LegacyScript::new(RC_LOCAL_SCRIPT_PATH_STOP, HALT_LOCAL_SERVICE, FINAL_TARGET),
        }
    }
}

impl GeneratorConfig {
    /// Build the configuration from the arguments following the program name.
    ///
    /// The manager passes the normal, early and late output directories.
    /// Only the normal one is used; with no arguments at all /tmp is used.
    pub(crate) fn from_args(args: &[String]) -> Result<Self> {
        let dest = match args {
            [] => PathBuf::from(GENERATOR_DEFAULT_DEST),
            [normal, _early, _late] => PathBuf::from(normal),
            _ => {
                return Err(Error::Invalid {
                    what: "This program takes three or no arguments.".to_string(),
                })
            }
        };

        Ok(GeneratorConfig {
            dest,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments() {
        let config = GeneratorConfig::from_args(&[]).unwrap();
        assert_eq!(config.dest, PathBuf::from("/tmp"));
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_three_arguments() {
        let config = GeneratorConfig::from_args(&args(&[
            "/run/sysmaster/generator",
            "/run/sysmaster/generator.early",
            "/run/sysmaster/generator.late",
        ]))
        .unwrap();
        assert_eq!(config.dest, PathBuf::from("/run/sysmaster/generator"));
        assert_eq!(config.unit_dir, PathBuf::from(SYSTEM_DATA_UNIT_DIR));
    }

    #[test]
    fn test_wrong_argument_count() {
        for v in [
            vec!["/run/a"],
            vec!["/run/a", "/run/b"],
            vec!["/run/a", "/run/b", "/run/c", "/run/d"],
        ] {
            let e = GeneratorConfig::from_args(&args(&v)).unwrap_err();
            assert_eq!(e.get_errno(), libc::EINVAL);
            assert!(e
                .to_string()
                .contains("This program takes three or no arguments."));
        }
    }

    #[test]
    fn test_legacy_scripts() {
        let config = GeneratorConfig::default();
        assert_eq!(config.start.path, PathBuf::from("/etc/rc.local"));
        assert_eq!(config.start.service, "rc-local.service");
        assert_eq!(config.start.target, "multi-user.target");
        assert_eq!(config.stop.path, PathBuf::from("/usr/sbin/halt.local"));
        assert_eq!(config.stop.service, "halt-local.service");
        assert_eq!(config.stop.target, "final.target");
    }
}
