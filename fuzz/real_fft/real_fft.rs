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
#![no_main]

use libfuzzer_sys::fuzz_target;
use srfft::{Srfft, packed_energy};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    exp: u8,
    re: f64,
    step: f64,
}

fuzz_target!(|data: Target| {
    if data.exp == 0 || data.exp > 14 {
        return;
    }
    if !data.re.is_finite() || data.re.abs() > 10000. {
        return;
    }
    if !data.step.is_finite() || data.step.abs() > 100. {
        return;
    }
    let size = 1usize << data.exp;
    let executor = Srfft::make_real_fft_f64(size).unwrap();
    let mut chunk = vec![data.re; size];
    for (i, chunk) in chunk.iter_mut().enumerate() {
        *chunk = data.re + i as f64 * data.step;
    }
    let mut output = vec![0f64; size];
    executor.execute(&chunk, &mut output).unwrap();

    assert!(output.iter().all(|x| x.is_finite()));
    let time_energy = chunk.iter().map(|&x| x * x).sum::<f64>();
    let spectrum_energy = packed_energy(&output).unwrap();
    assert!((time_energy - spectrum_energy).abs() <= 1e-9 * time_energy.max(1.));
});
