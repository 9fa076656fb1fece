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
use crate::err::{SrfftError, try_vec};
use num_traits::AsPrimitive;
use std::f64::consts::PI;

/// Samples one period-aligned cosine: `cos(2pi * frequency_bin * i / n)` for `i` in `0..n`.
pub fn cosine_signal<T: FftSample>(n: usize, frequency_bin: usize) -> Result<Vec<T>, SrfftError>
where
    f64: AsPrimitive<T>,
{
    if n == 0 {
        return Err(SrfftError::ZeroSizedFft);
    }
    let mut output = try_vec![T::zero(); n];
    fill_cosine(&mut output, frequency_bin);
    Ok(output)
}

/// In-place variant of [`cosine_signal`], sampling over `output.len()` points.
pub fn fill_cosine<T: FftSample>(output: &mut [T], frequency_bin: usize)
where
    f64: AsPrimitive<T>,
{
    let factor = 2. * PI * frequency_bin as f64 / output.len() as f64;
    for (i, dst) in output.iter_mut().enumerate() {
        *dst = (factor * i as f64).cos().as_();
    }
}
