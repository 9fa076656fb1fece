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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SrfftError {
    OutOfMemory(usize),
    ZeroSizedFft,
    SizeTooSmall(usize),
    NotPowerOfTwo(usize),
    InvalidInputLength(usize, usize),
    InvalidOutputLength(usize, usize),
    InvalidSizeMultiplier(usize, usize),
}

impl Error for SrfftError {}

impl std::fmt::Display for SrfftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SrfftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector",))
            }
            SrfftError::ZeroSizedFft => f.write_str("Cannot execute FFT on zero-sized buffers"),
            SrfftError::SizeTooSmall(n) => f.write_fmt(format_args!(
                "FFT size must be at least {MIN_FFT_SIZE}, but it was {n}"
            )),
            SrfftError::NotPowerOfTwo(n) => {
                f.write_fmt(format_args!("FFT size must be a power of two, but it was {n}"))
            }
            SrfftError::InvalidInputLength(s0, s1) => f.write_fmt(format_args!(
                "Input length expected to be {s0}, but it was {s1}"
            )),
            SrfftError::InvalidOutputLength(s0, s1) => f.write_fmt(format_args!(
                "Output length expected to be {s0}, but it was {s1}"
            )),
            SrfftError::InvalidSizeMultiplier(s0, s1) => f.write_fmt(format_args!(
                "Size {s0} is assumed to be multiplier of {s1} to execute many FFT, but it wasn't"
            )),
        }
    }
}

/// Smallest transform length the split-radix network supports.
pub const MIN_FFT_SIZE: usize = 2;

/// Checks that `n` is a usable split-radix length: a power of two, at least [`MIN_FFT_SIZE`].
pub(crate) fn validate_fft_size(n: usize) -> Result<(), SrfftError> {
    if n == 0 {
        return Err(SrfftError::ZeroSizedFft);
    }
    if n < MIN_FFT_SIZE {
        return Err(SrfftError::SizeTooSmall(n));
    }
    if !n.is_power_of_two() {
        return Err(SrfftError::NotPowerOfTwo(n));
    }
    Ok(())
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::SrfftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
