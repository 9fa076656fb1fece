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
//! Readers for the split-radix packed spectrum.
//!
//! A packed frame of length `n` stores bin `k` as `re = packed[k]` for
//! `0 <= k <= n/2` and `im = packed[n - k]` for `0 < k < n/2`. Bins `0` and
//! `n/2` are purely real.
use crate::err::{SrfftError, validate_fft_size};
use num_complex::Complex;
use num_traits::Float;

/// Expands a packed frame into its `n/2 + 1` non-negative frequency bins.
pub fn unpack_spectrum<T: Float>(
    packed: &[T],
    output: &mut [Complex<T>],
) -> Result<(), SrfftError> {
    validate_fft_size(packed.len())?;
    let n = packed.len();
    let half = n / 2;
    if output.len() != half + 1 {
        return Err(SrfftError::InvalidOutputLength(half + 1, output.len()));
    }

    output[0] = Complex::new(packed[0], T::zero());
    output[half] = Complex::new(packed[half], T::zero());
    for (k, dst) in output.iter_mut().enumerate().take(half).skip(1) {
        *dst = Complex::new(packed[k], packed[n - k]);
    }
    Ok(())
}

/// Magnitude of each of the `n/2 + 1` non-negative frequency bins.
pub fn magnitudes<T: Float>(packed: &[T], output: &mut [T]) -> Result<(), SrfftError> {
    validate_fft_size(packed.len())?;
    let n = packed.len();
    let half = n / 2;
    if output.len() != half + 1 {
        return Err(SrfftError::InvalidOutputLength(half + 1, output.len()));
    }

    output[0] = packed[0].abs();
    output[half] = packed[half].abs();
    for (k, dst) in output.iter_mut().enumerate().take(half).skip(1) {
        *dst = packed[k].hypot(packed[n - k]);
    }
    Ok(())
}

/// Energy of the full two-sided spectrum a packed frame stands for.
///
/// Interior bins count twice, once for themselves and once for their
/// conjugate mirror. For a frame produced by the unitary forward transform
/// this equals the energy of the time-domain input.
pub fn packed_energy<T: Float>(packed: &[T]) -> Result<T, SrfftError> {
    validate_fft_size(packed.len())?;
    let n = packed.len();
    let half = n / 2;

    let edges = packed[0] * packed[0] + packed[half] * packed[half];
    let interior = (1..half).fold(T::zero(), |acc, k| {
        acc + packed[k] * packed[k] + packed[n - k] * packed[n - k]
    });
    Ok(edges + interior + interior)
}
