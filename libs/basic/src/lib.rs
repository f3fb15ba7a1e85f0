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

//!
pub mod error;
pub use error::*;
#[cfg(feature = "fs")]
pub mod fs;

/// Special user boot targets */
pub const MULTI_USER_TARGET: &str = "multi-user.target";
/// the last target reached during shutdown
pub const FINAL_TARGET: &str = "final.target";

/// runs /etc/rc.local at the end of boot
pub const RC_LOCAL_SERVICE: &str = "rc-local.service";
/// runs /usr/sbin/halt.local during shutdown
pub const HALT_LOCAL_SERVICE: &str = "halt-local.service";
