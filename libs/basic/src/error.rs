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

//! error definitions
use nix::errno::Errno;
use snafu::prelude::*;
#[allow(unused_imports)]
pub use snafu::ResultExt;

#[allow(missing_docs)]
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Errno: {}", source))]
    Nix { source: nix::Error },

    #[snafu(display("Invalid: '{}'.", what))]
    Invalid { what: String },
}

impl Error {
    /// Translate the basic error to error number.
    pub fn get_errno(&self) -> i32 {
        match self {
            Error::Nix { source } => *source as i32,
            Error::Invalid { what: _ } => Errno::EINVAL as i32,
        }
    }
}

///
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_errno() {
        let e = Error::Nix {
            source: Errno::EROFS,
        };
        assert_eq!(e.get_errno(), libc::EROFS);

        let e = Error::Invalid {
            what: "argument count".to_string(),
        };
        assert_eq!(e.get_errno(), libc::EINVAL);
    }

    #[test]
    fn test_display() {
        let e = Error::Nix {
            source: Errno::ENOENT,
        };
        assert!(e.to_string().starts_with("Errno: ENOENT"));
    }
}
