// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use mipssim::core::error::EmulatorError;
use mipssim::core::system::System;

/// MIPS32 fetch-decode-execute interpreter
#[derive(Parser)]
#[command(name = "mipssim")]
#[command(about = "MIPS32 instruction-set interpreter", long_about = None)]
struct Args {
    /// Path to a binary image of 32-bit MIPS32 instruction words
    image: PathBuf,

    /// Required filename extension (without the leading dot)
    #[arg(short = 'e', long)]
    extension: Option<String>,

    /// Memory size in 32-bit words
    #[arg(short = 'm', long, default_value = "1024")]
    memory_words: usize,

    /// Maximum instructions to execute before giving up on a runaway image
    #[arg(short = 'n', long, default_value = "1000000")]
    max_instructions: u64,

    /// Treat unknown instructions as fatal instead of logging and skipping
    #[arg(short = 's', long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    info!("mipssim v{}", env!("CARGO_PKG_VERSION"));

    let mut system = System::with_memory_words(args.memory_words);
    system.set_strict_decoding(args.strict);

    let extension = args.extension.as_deref();
    match system.load_image_from_path(&args.image, extension) {
        Ok(report) => {
            info!(
                "loaded {} word(s) from {}",
                report.words_loaded,
                args.image.display()
            );
            if report.truncated {
                log::warn!("image truncated to fit {} word(s) of memory", args.memory_words);
            }
        }
        Err(EmulatorError::WrongSuffix { path, expected }) => {
            error!("{path} does not have the required extension {expected}");
            return ExitCode::from(1);
        }
        Err(e @ EmulatorError::SourceUnavailable(_)) => {
            error!("{e}");
            return ExitCode::from(1);
        }
        Err(e) => {
            error!("{e}");
            return ExitCode::from(1);
        }
    }

    match system.run_with_limit(args.max_instructions) {
        Ok(summary) => {
            if !summary.halted_naturally {
                log::warn!(
                    "stopped after {} instruction(s) without PC leaving the loaded region",
                    summary.instructions_executed
                );
            } else {
                info!(
                    "halted after {} instruction(s), pc=0x{:08X}",
                    summary.instructions_executed,
                    system.cpu().pc()
                );
            }
            for r in 0u8..32u8 {
                info!("r{r} = 0x{:08X}", system.cpu().reg(r));
            }
            info!("hi = 0x{:08X}, lo = 0x{:08X}", system.cpu().hi(), system.cpu().lo());
            ExitCode::SUCCESS
        }
        Err(EmulatorError::UnknownInstruction { instruction, pc }) => {
            error!("unknown instruction 0x{instruction:08X} at pc=0x{pc:08X}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}
