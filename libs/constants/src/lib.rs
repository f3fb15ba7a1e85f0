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

//! Common used constants by sysmaster generators and other extensions.

/// Directory holding the unit files shipped with sysmaster
pub const SYSTEM_DATA_UNIT_DIR: &str = "/usr/lib/sysmaster";

/// Legacy script run at the end of boot
pub const RC_LOCAL_SCRIPT_PATH_START: &str = "/etc/rc.local";
/// Legacy script run late during shutdown
pub const RC_LOCAL_SCRIPT_PATH_STOP: &str = "/usr/sbin/halt.local";

/// Default destination of generator output when no directories are given
pub const GENERATOR_DEFAULT_DEST: &str = "/tmp";

/// Environment variable selecting the log level of extensions
pub const LOG_LEVEL_ENV: &str = "SYSMASTER_LOG_LEVEL";
/// Environment variable selecting the log targets of extensions
pub const LOG_TARGET_ENV: &str = "SYSMASTER_LOG_TARGET";

/// Kernel log buffer device
pub const KMSG_PATH: &str = "/dev/kmsg";
/// Syslog datagram socket
pub const SYSLOG_SOCKET: &str = "/dev/log";
