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
use num_traits::AsPrimitive;
use srfft::{FftSample, RealFftExecutor, SplitRadixReal, SrfftError, cosine_signal};
use std::hint::black_box;
use std::time::Instant;

/// Largest exponent the harness accepts; the input and output of a `2^26` transform
/// already take a gigabyte in double precision.
pub(crate) const MAX_EXP: u32 = 26;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimingConfig {
    pub(crate) min_exp: u32,
    pub(crate) max_exp: u32,
    pub(crate) trials: usize,
    pub(crate) min_ffts_per_trial: usize,
    pub(crate) frequency_bin: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_exp: 4,
            max_exp: 16,
            trials: 10,
            min_ffts_per_trial: 1000,
            frequency_bin: 1,
        }
    }
}

impl TimingConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.min_exp == 0 {
            return Err("Minimum exponent must be at least 1".to_string());
        }
        if self.max_exp > MAX_EXP {
            return Err(format!(
                "Maximum exponent must be at most {MAX_EXP}, but it was {}",
                self.max_exp
            ));
        }
        if self.min_exp > self.max_exp {
            return Err(format!(
                "Minimum exponent {} is greater than maximum exponent {}",
                self.min_exp, self.max_exp
            ));
        }
        if self.trials == 0 {
            return Err("Number of trials must be positive".to_string());
        }
        if self.min_ffts_per_trial == 0 {
            return Err("Minimum number of FFTs per trial must be positive".to_string());
        }
        Ok(())
    }

    pub(crate) fn exponents(&self) -> impl Iterator<Item = u32> {
        self.min_exp..=self.max_exp
    }

    /// Trial size for exponent `exp`, chosen so every size runs for about the
    /// same wall time as `min_ffts_per_trial` transforms of the largest size.
    pub(crate) fn ffts_per_trial(&self, exp: u32) -> usize {
        let ratio = fft_cost(self.max_exp) / fft_cost(exp);
        ((self.min_ffts_per_trial as f64 * ratio).round() as usize).max(1)
    }
}

/// Relative cost of a size `2^exp` transform, proportional to `n log2 n`.
pub(crate) fn fft_cost(exp: u32) -> f64 {
    exp as f64 * (1u64 << exp) as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SizeTiming {
    pub(crate) exp: u32,
    pub(crate) size: usize,
    pub(crate) ffts_per_trial: usize,
    pub(crate) min_us_per_fft: f64,
}

/// Runs `config.trials` trials of back-to-back transforms of size `2^exp`
/// and keeps the fastest average time per transform.
pub(crate) fn time_size<T: FftSample>(
    config: &TimingConfig,
    exp: u32,
) -> Result<SizeTiming, SrfftError>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    let size = 1usize << exp;
    let input = cosine_signal::<T>(size, config.frequency_bin)?;
    let mut output = vec![T::zero(); size];
    let executor = SplitRadixReal::<T>::new(size)?;
    let ffts_per_trial = config.ffts_per_trial(exp);

    let mut min_us_per_fft = f64::INFINITY;
    for _ in 0..config.trials {
        let begin = Instant::now();
        for _ in 0..ffts_per_trial {
            executor.execute(black_box(&input), black_box(&mut output))?;
        }
        let elapsed = begin.elapsed();
        let us_per_fft = 1e6 * elapsed.as_secs_f64() / ffts_per_trial as f64;
        min_us_per_fft = min_us_per_fft.min(us_per_fft);
    }

    Ok(SizeTiming {
        exp,
        size,
        ffts_per_trial,
        min_us_per_fft,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScalingAnomaly {
    pub(crate) size: usize,
    pub(crate) ratio: f64,
    pub(crate) expected: f64,
}

/// Ratio by which time per transform may stray from `n log n` before it is flagged.
const SCALING_TOLERANCE: f64 = 4.;

/// Flags doublings whose time ratio `t(2n) / t(n)` is far from `2 (e + 1) / e`.
pub(crate) fn scaling_anomalies(timings: &[SizeTiming]) -> Vec<ScalingAnomaly> {
    timings
        .windows(2)
        .filter(|w| w[1].exp == w[0].exp + 1 && w[0].min_us_per_fft > 0.)
        .filter_map(|w| {
            let expected = fft_cost(w[1].exp) / fft_cost(w[0].exp);
            let ratio = w[1].min_us_per_fft / w[0].min_us_per_fft;
            if ratio > expected * SCALING_TOLERANCE || ratio < expected / SCALING_TOLERANCE {
                Some(ScalingAnomaly {
                    size: w[1].size,
                    ratio,
                    expected,
                })
            } else {
                None
            }
        })
        .collect()
}
