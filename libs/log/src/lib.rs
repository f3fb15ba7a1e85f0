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

//! Logging for sysmaster extensions.
//!
//! Call sites keep using `log::debug!` and friends; this crate only decides
//! where the records end up.
pub mod logger;

/// reexport log::Log
pub use log::{debug, error, info, log, trace, warn};
pub use log::{max_level, set_max_level};
pub use log::{Level, LevelFilter};
pub use log::{Log, Metadata, Record};

pub use logger::{init_log, init_log_for_generator, parse_level, parse_targets, LogTarget};

#[cfg(test)]
mod tests {
    use crate::{init_log, Level, LogTarget};

    #[test]
    fn test_init_log_to_console() {
        init_log("test", Level::Debug, &[LogTarget::Console, LogTarget::Console]);
        crate::error!("hello, error!");
        crate::set_max_level(Level::Info.to_level_filter());
        crate::info!("hello, info!");
        crate::debug!("hello debug!"); /* Won't print */
        /* The global logger can only be set once, this one is reported and ignored. */
        init_log("test", Level::Debug, &[LogTarget::Console]);
        crate::info!("hello again!");
    }
}
