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
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
mod bitrev;
mod err;
mod normalize;
mod real_fft;
mod signal;
mod spectrum;
mod split_radix;

pub use bitrev::reverse_bin_permute;
pub use err::{MIN_FFT_SIZE, SrfftError};
pub use real_fft::{RealFftExecutor, SplitRadixReal, real_fft};
pub use signal::{cosine_signal, fill_cosine};
pub use spectrum::{magnitudes, packed_energy, unpack_spectrum};

use num_traits::{AsPrimitive, Float};
use std::fmt::Debug;

/// Sample types the transform runs on.
pub trait FftSample: Float + Default + Debug + Send + Sync + 'static {}

impl FftSample for f32 {}
impl FftSample for f64 {}

pub struct Srfft {}

impl Srfft {
    fn strategy<T: FftSample>(
        n: usize,
    ) -> Result<Box<dyn RealFftExecutor<T> + Send + Sync>, SrfftError>
    where
        f64: AsPrimitive<T>,
        usize: AsPrimitive<T>,
    {
        SplitRadixReal::<T>::new(n)
            .map(|x| Box::new(x) as Box<dyn RealFftExecutor<T> + Send + Sync>)
    }

    pub fn make_real_fft_f32(
        n: usize,
    ) -> Result<Box<dyn RealFftExecutor<f32> + Send + Sync>, SrfftError> {
        Srfft::strategy(n)
    }

    pub fn make_real_fft_f64(
        n: usize,
    ) -> Result<Box<dyn RealFftExecutor<f64> + Send + Sync>, SrfftError> {
        Srfft::strategy(n)
    }
}
