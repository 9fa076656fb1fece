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
use crate::FftSample;
use crate::bitrev::revbin_permute;
use crate::err::{SrfftError, validate_fft_size};
use crate::normalize::normalize;
use crate::split_radix::split_radix_butterflies;
use num_traits::AsPrimitive;
use std::marker::PhantomData;

/// Forward real-input FFT producing the split-radix packed spectrum.
///
/// For a frame of length `n` the output holds, scaled by `1/sqrt(n)`:
/// - `output[k]` = real part of bin `k`, for `0 <= k <= n/2`
/// - `output[n - k]` = imaginary part of bin `k`, for `0 < k < n/2`
pub trait RealFftExecutor<T> {
    /// Transforms every `length()`-sized frame of `input` into the matching frame of `output`.
    fn execute(&self, input: &[T], output: &mut [T]) -> Result<(), SrfftError>;
    fn length(&self) -> usize;
}

/// Split-radix real FFT of a fixed power-of-two length.
///
/// Holds nothing but its length: twiddles are computed while the stages run,
/// and all intermediate values live in the caller's output buffer.
#[derive(Debug, Clone, Copy)]
pub struct SplitRadixReal<T> {
    length: usize,
    phantom_data: PhantomData<T>,
}

impl<T: FftSample> SplitRadixReal<T> {
    pub fn new(length: usize) -> Result<SplitRadixReal<T>, SrfftError> {
        validate_fft_size(length)?;
        Ok(SplitRadixReal {
            length,
            phantom_data: PhantomData,
        })
    }
}

impl<T: FftSample> RealFftExecutor<T> for SplitRadixReal<T>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    fn execute(&self, input: &[T], output: &mut [T]) -> Result<(), SrfftError> {
        if input.len() != output.len() {
            return Err(SrfftError::InvalidOutputLength(input.len(), output.len()));
        }
        if input.len() % self.length != 0 {
            return Err(SrfftError::InvalidSizeMultiplier(input.len(), self.length));
        }
        for (src, dst) in input
            .chunks_exact(self.length)
            .zip(output.chunks_exact_mut(self.length))
        {
            forward_frame(src, dst);
        }
        Ok(())
    }

    fn length(&self) -> usize {
        self.length
    }
}

/// Forward split-radix real FFT of `input` into `output`.
///
/// The transform length is `input.len()`, which must be a power of two and at least 2.
/// `output` must have the same length; see [`RealFftExecutor`] for its layout.
pub fn real_fft<T: FftSample>(input: &[T], output: &mut [T]) -> Result<(), SrfftError>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    validate_fft_size(input.len())?;
    if output.len() != input.len() {
        return Err(SrfftError::InvalidOutputLength(input.len(), output.len()));
    }
    forward_frame(input, output);
    Ok(())
}

#[inline]
fn forward_frame<T: FftSample>(input: &[T], output: &mut [T])
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    revbin_permute(input, output);
    split_radix_butterflies(output);
    normalize(output);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::cosine_signal;
    use crate::spectrum::packed_energy;
    use rand::Rng;
    use realfft::RealFftPlanner;

    fn random_signal(size: usize) -> Vec<f64> {
        let mut input = vec![0f64; size];
        for z in input.iter_mut() {
            *z = rand::rng().random::<f64>() * 2. - 1.;
        }
        input
    }

    /// Packs realfft's half spectrum into the split-radix layout, scaled to unit energy.
    fn reference_packed(input: &[f64]) -> Vec<f64> {
        let size = input.len();
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(size);
        let mut scratch_input = input.to_vec();
        let mut spectrum = r2c.make_output_vec();
        r2c.process(&mut scratch_input, &mut spectrum).unwrap();

        let scale = 1. / (size as f64).sqrt();
        let mut packed = vec![0f64; size];
        for k in 0..=size / 2 {
            packed[k] = spectrum[k].re * scale;
        }
        for k in 1..size / 2 {
            packed[size - k] = spectrum[k].im * scale;
        }
        packed
    }

    #[test]
    fn test_matches_realfft() {
        for e in 1..13 {
            let size = 1usize << e;
            let input = random_signal(size);
            let mut output = vec![0f64; size];
            real_fft(&input, &mut output).unwrap();
            let reference = reference_packed(&input);
            output.iter().zip(reference.iter()).enumerate().for_each(|(i, (a, b))| {
                assert!(
                    (a - b).abs() < 1e-10,
                    "a {} != b {} at {} for size {}",
                    a,
                    b,
                    i,
                    size
                );
            });
        }
    }

    #[test]
    fn test_cosine_size_8() {
        let input = cosine_signal::<f64>(8, 1).unwrap();
        let mut output = vec![0f64; 8];
        real_fft(&input, &mut output).unwrap();
        let reference = reference_packed(&input);
        for (i, (a, b)) in output.iter().zip(reference.iter()).enumerate() {
            assert!((a - b).abs() < 1e-12, "a {a} != b {b} at {i}");
        }
        assert!((output[1] - std::f64::consts::SQRT_2).abs() < 1e-12);
        for (i, &v) in output.iter().enumerate().filter(|x| x.0 != 1) {
            assert!(v.abs() < 1e-12, "unexpected energy {v} at {i}");
        }
    }

    #[test]
    fn test_impulse() {
        for e in 1..17 {
            let size = 1usize << e;
            let mut input = vec![0f64; size];
            input[0] = 1.;
            let mut output = vec![0f64; size];
            real_fft(&input, &mut output).unwrap();
            let expected = 1. / (size as f64).sqrt();
            for (i, &v) in output.iter().enumerate() {
                if i <= size / 2 {
                    assert!(
                        (v - expected).abs() < 1e-12,
                        "real slot {i} is {v} for size {size}"
                    );
                } else {
                    assert!(v.abs() < 1e-12, "imaginary slot {i} is {v} for size {size}");
                }
            }
        }
    }

    #[test]
    fn test_energy_preservation() {
        for e in 1..17 {
            let size = 1usize << e;
            let input = random_signal(size);
            let mut output = vec![0f64; size];
            real_fft(&input, &mut output).unwrap();
            let time_energy = input.iter().map(|&x| x * x).sum::<f64>();
            let spectrum_energy = packed_energy(&output).unwrap();
            assert!(
                ((time_energy - spectrum_energy) / time_energy).abs() < 1e-9,
                "energy {} != {} for size {}",
                time_energy,
                spectrum_energy,
                size
            );
        }
    }

    #[test]
    fn test_linearity() {
        let a = 1.75f64;
        let b = -0.4f64;
        for e in 1..13 {
            let size = 1usize << e;
            let x = random_signal(size);
            let y = random_signal(size);
            let mixed = x
                .iter()
                .zip(y.iter())
                .map(|(&x, &y)| a * x + b * y)
                .collect::<Vec<_>>();

            let mut fx = vec![0f64; size];
            let mut fy = vec![0f64; size];
            let mut fmixed = vec![0f64; size];
            real_fft(&x, &mut fx).unwrap();
            real_fft(&y, &mut fy).unwrap();
            real_fft(&mixed, &mut fmixed).unwrap();

            for i in 0..size {
                let expected = a * fx[i] + b * fy[i];
                assert!(
                    (fmixed[i] - expected).abs() < 1e-10,
                    "{} != {} at {} for size {}",
                    fmixed[i],
                    expected,
                    i,
                    size
                );
            }
        }
    }

    #[test]
    fn test_f32_matches_f64() {
        for e in 1..12 {
            let size = 1usize << e;
            let input = random_signal(size);
            let input32 = input.iter().map(|&x| x as f32).collect::<Vec<_>>();
            let mut output = vec![0f64; size];
            let mut output32 = vec![0f32; size];
            real_fft(&input, &mut output).unwrap();
            real_fft(&input32, &mut output32).unwrap();
            output.iter().zip(output32.iter()).for_each(|(a, b)| {
                assert!(
                    (a - *b as f64).abs() < 1e-4,
                    "a {} != b {} for size {}",
                    a,
                    b,
                    size
                );
            });
        }
    }

    #[test]
    fn test_rejects_invalid_sizes() {
        let mut output = vec![0f64; 12];
        assert_eq!(
            real_fft(&[0f64; 12], &mut output),
            Err(SrfftError::NotPowerOfTwo(12))
        );
        let mut output = vec![0f64; 1];
        assert_eq!(
            real_fft(&[1f64], &mut output),
            Err(SrfftError::SizeTooSmall(1))
        );
        let empty: [f64; 0] = [];
        let mut output: Vec<f64> = vec![];
        assert_eq!(
            real_fft(&empty, &mut output),
            Err(SrfftError::ZeroSizedFft)
        );
        let mut output = vec![0f64; 4];
        assert_eq!(
            real_fft(&[0f64; 8], &mut output),
            Err(SrfftError::InvalidOutputLength(8, 4))
        );
        assert!(SplitRadixReal::<f32>::new(48).is_err());
        assert!(SplitRadixReal::<f32>::new(0).is_err());
    }

    #[test]
    fn test_executor_frames() {
        let size = 64;
        let executor = SplitRadixReal::<f64>::new(size).unwrap();
        let input = random_signal(size * 3);
        let mut output = vec![0f64; size * 3];
        executor.execute(&input, &mut output).unwrap();
        for (src, dst) in input.chunks_exact(size).zip(output.chunks_exact(size)) {
            let mut single = vec![0f64; size];
            real_fft(src, &mut single).unwrap();
            assert_eq!(single.as_slice(), dst);
        }

        let mut short = vec![0f64; size * 2 + 1];
        assert_eq!(
            executor.execute(&random_signal(size * 2 + 1), &mut short),
            Err(SrfftError::InvalidSizeMultiplier(size * 2 + 1, size))
        );
        let mut mismatched = vec![0f64; size];
        assert_eq!(
            executor.execute(&input, &mut mismatched),
            Err(SrfftError::InvalidOutputLength(size * 3, size))
        );
    }

    #[test]
    fn test_concurrent_execution() {
        let size = 1024;
        let executor = SplitRadixReal::<f64>::new(size).unwrap();
        let inputs = (0..4).map(|_| random_signal(size)).collect::<Vec<_>>();
        let expected = inputs
            .iter()
            .map(|input| {
                let mut output = vec![0f64; size];
                executor.execute(input, &mut output).unwrap();
                output
            })
            .collect::<Vec<_>>();

        let mut outputs = vec![vec![0f64; size]; inputs.len()];
        std::thread::scope(|s| {
            for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
                let executor = &executor;
                s.spawn(move || {
                    for _ in 0..16 {
                        executor.execute(input, output).unwrap();
                    }
                });
            }
        });
        assert_eq!(outputs, expected);
    }
}
