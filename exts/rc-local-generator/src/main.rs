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

//! rc-local-generator pulls the legacy rc.local and halt.local scripts into
//! the boot transaction.
//! # Principle
//! 1. If /etc/rc.local is executable, rc-local.service is wanted by multi-user.target.
//! 2. If /usr/sbin/halt.local is executable, halt-local.service is wanted by final.target.
//! 3. The wants are expressed as symlinks under the generator output directory.
//! # Why a generator
//! A service carrying ConditionFileIsExecutable= would still sit in the
//! dependency tree as a synchronization point even when conditioned out.

mod config;
mod rc_local_generator;

use config::GeneratorConfig;
use std::process;

fn main() {
    log::init_log_for_generator("rc-local-generator");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match GeneratorConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            process::exit(-e.get_errno());
        }
    };

    if let Err(e) = rc_local_generator::run(&config) {
        process::exit(-e.get_errno());
    }
}
