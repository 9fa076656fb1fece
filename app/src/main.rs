/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
mod harness;

use crate::harness::{SizeTiming, TimingConfig, scaling_anomalies, time_size};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "time_ffts")]
#[command(about = "Time split-radix real FFTs over a range of power-of-two sizes", long_about = None)]
struct Cli {
    /// Smallest transform size, as a power of two.
    #[arg(long, value_name = "EXP", default_value_t = 4)]
    min_exp: u32,
    /// Largest transform size, as a power of two.
    #[arg(long, value_name = "EXP", default_value_t = 16)]
    max_exp: u32,
    /// Number of timed trials per size; the fastest one is reported.
    #[arg(long, default_value_t = 10)]
    trials: usize,
    /// Transforms per trial at the largest size; smaller sizes run proportionally more.
    #[arg(long, value_name = "COUNT", default_value_t = 1000)]
    min_ffts_per_trial: usize,
    /// Frequency bin of the cosine test input.
    #[arg(long, value_name = "BIN", default_value_t = 1)]
    frequency_bin: usize,
    /// Sample precision of the timed transform.
    #[arg(long, value_enum, default_value_t = Precision::F64)]
    precision: Precision,
    /// Print size and trial length next to each timing.
    #[arg(long)]
    verbose: bool,
    /// Warn when the time per transform does not scale like n log n.
    #[arg(long)]
    check_scaling: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Precision {
    F32,
    F64,
}

fn main() {
    let cli = Cli::parse();

    let config = TimingConfig {
        min_exp: cli.min_exp,
        max_exp: cli.max_exp,
        trials: cli.trials,
        min_ffts_per_trial: cli.min_ffts_per_trial,
        frequency_bin: cli.frequency_bin,
    };
    if let Err(error) = config.validate() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }

    let mut timings: Vec<SizeTiming> = Vec::new();
    for exp in config.exponents() {
        let timing = match cli.precision {
            Precision::F32 => time_size::<f32>(&config, exp),
            Precision::F64 => time_size::<f64>(&config, exp),
        };
        let timing = match timing {
            Ok(timing) => timing,
            Err(error) => {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        };

        if cli.verbose {
            println!(
                "{} {} {:.6}",
                timing.size, timing.ffts_per_trial, timing.min_us_per_fft
            );
        } else {
            println!("{:.6}", timing.min_us_per_fft);
        }
        timings.push(timing);
    }

    if cli.check_scaling {
        for anomaly in scaling_anomalies(&timings) {
            eprintln!(
                "Warning: size {} took {:.2}x the time of size {}, expected about {:.2}x",
                anomaly.size,
                anomaly.ratio,
                anomaly.size / 2,
                anomaly.expected
            );
        }
    }
}
