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
//! In-place split-radix butterfly network for real input.
//!
//! The recursion of the split-radix decomposition is unrolled into stages of
//! growing block size `n2 = 2, 4, 8, .., n`. Every stage visits its blocks in
//! the order given by [`BlockOffsets`], which must be followed exactly: the
//! blocks of one stage are disjoint, but the ranges they cover differ from
//! stage to stage.
use num_traits::{AsPrimitive, Float};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Start offsets of the size-`n2` blocks in a length-`n` transform.
///
/// Walks rows `i0 = ix, ix + id, ..` while `i0 < n`, then advances with
/// `ix = 2 * id - n2`, `id = 4 * id`, starting from `ix = 0`, `id = 2 * n2`,
/// until `ix >= n`.
#[derive(Debug, Clone)]
pub(crate) struct BlockOffsets {
    n: usize,
    n2: usize,
    ix: usize,
    id: usize,
    i0: usize,
}

impl BlockOffsets {
    pub(crate) fn new(n: usize, n2: usize) -> Self {
        Self {
            n,
            n2,
            ix: 0,
            id: n2 << 1,
            i0: 0,
        }
    }
}

impl Iterator for BlockOffsets {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.ix >= self.n {
                return None;
            }
            if self.i0 < self.n {
                let i0 = self.i0;
                self.i0 += self.id;
                return Some(i0);
            }
            self.ix = (self.id << 1) - self.n2;
            self.id <<= 2;
            self.i0 = self.ix;
        }
    }
}

/// Angle pair `(cos a, sin a)` and `(cos 3a, sin 3a)` for `a = j * 2pi / n2`.
///
/// The triple angle is derived from the single one with
/// `cos 3a = 4 cos a (cos^2 a - 3/4)` and `sin 3a = 4 sin a (3/4 - sin^2 a)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Twiddle<T> {
    pub(crate) cc1: T,
    pub(crate) ss1: T,
    pub(crate) cc3: T,
    pub(crate) ss3: T,
}

impl<T: Float + 'static> Twiddle<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(j: usize, n2: usize) -> Self {
        let angle = j as f64 * (2. * PI / n2 as f64);
        let (v_sin, v_cos) = angle.sin_cos();
        let cc1: T = v_cos.as_();
        let ss1: T = v_sin.as_();
        let three_quarters: T = 0.75f64.as_();
        let four: T = 4f64.as_();
        Self {
            cc1,
            ss1,
            cc3: four * cc1 * (cc1 * cc1 - three_quarters),
            ss3: four * ss1 * (three_quarters - ss1 * ss1),
        }
    }
}

#[inline(always)]
fn sum_diff<T: Float>(a: T, b: T) -> (T, T) {
    (a + b, a - b)
}

/// Complex rotation of `re + i*im` by `cos + i*sin`.
#[inline(always)]
fn rotate<T: Float>(re: T, im: T, cos: T, sin: T) -> (T, T) {
    (re * cos - im * sin, re * sin + im * cos)
}

/// Turns a bit-reversed sequence into the unnormalized packed spectrum.
///
/// `x.len()` must be a power of two, at least 2.
pub(crate) fn split_radix_butterflies<T: Float + 'static>(x: &mut [T])
where
    f64: AsPrimitive<T>,
{
    let n = x.len();
    base_stage(x);

    let mut n2 = 4;
    while n2 <= n {
        radix4_stage(x, n2);
        twiddle_stage(x, n2);
        n2 <<= 1;
    }
}

fn base_stage<T: Float>(x: &mut [T]) {
    for i0 in BlockOffsets::new(x.len(), 2) {
        let (s, d) = sum_diff(x[i0], x[i0 + 1]);
        x[i0] = s;
        x[i0 + 1] = d;
    }
}

fn radix4_stage<T: Float + 'static>(x: &mut [T], n2: usize)
where
    f64: AsPrimitive<T>,
{
    let n4 = n2 >> 2;
    let n8 = n2 >> 3;
    for i0 in BlockOffsets::new(x.len(), n2) {
        quarter_combine(x, i0, n4);
        if n4 != 1 {
            eighth_combine(x, i0 + n8, n4);
        }
    }
}

/// `x1, x3 <- x1 + (x3 + x4), x1 - (x3 + x4)` and `x4 <- x4 - x3`.
#[inline(always)]
fn quarter_combine<T: Float>(x: &mut [T], i1: usize, n4: usize) {
    let i3 = i1 + 2 * n4;
    let i4 = i3 + n4;

    let s = x[i3] + x[i4];
    x[i4] = x[i4] - x[i3];
    let (hi, lo) = sum_diff(x[i1], s);
    x[i1] = hi;
    x[i3] = lo;
}

/// Combine at the eighth point of a block, where the twiddle angle is exactly 45 degrees.
#[inline(always)]
fn eighth_combine<T: Float + 'static>(x: &mut [T], i1: usize, n4: usize)
where
    f64: AsPrimitive<T>,
{
    let i2 = i1 + n4;
    let i3 = i2 + n4;
    let i4 = i3 + n4;
    let frac_1_sqrt_2: T = FRAC_1_SQRT_2.as_();

    let (s, d) = sum_diff(x[i3], x[i4]);
    let t1 = -s * frac_1_sqrt_2;
    let t2 = d * frac_1_sqrt_2;

    let (hi, lo) = sum_diff(t1, x[i2]);
    x[i4] = hi;
    x[i3] = lo;

    let (hi, lo) = sum_diff(x[i1], t2);
    x[i1] = hi;
    x[i2] = lo;
}

fn twiddle_stage<T: Float + 'static>(x: &mut [T], n2: usize)
where
    f64: AsPrimitive<T>,
{
    let n4 = n2 >> 2;
    let n8 = n2 >> 3;
    for j in 1..n8 {
        let twiddle = Twiddle::new(j, n2);
        for i0 in BlockOffsets::new(x.len(), n2) {
            twiddle_butterfly(x, i0, j, n4, &twiddle);
        }
    }
}

/// Split-radix butterfly for sub-index `j` and its mirror `n4 - j` of the block at `i0`.
#[inline(always)]
fn twiddle_butterfly<T: Float>(x: &mut [T], i0: usize, j: usize, n4: usize, tw: &Twiddle<T>) {
    let i1 = i0 + j;
    let i2 = i1 + n4;
    let i3 = i2 + n4;
    let i4 = i3 + n4;

    let i5 = i0 + n4 - j;
    let i6 = i5 + n4;
    let i7 = i6 + n4;
    let i8 = i7 + n4;

    let (t2, t1) = rotate(x[i7], x[i3], tw.cc1, tw.ss1);
    let (t4, t3) = rotate(x[i8], x[i4], tw.cc3, tw.ss3);

    let (sum_re, diff_re) = sum_diff(t2, t4);
    x[i8] = sum_re + x[i6];
    x[i3] = sum_re - x[i6];

    let sum_im = t1 + t3;
    let diff_im = t3 - t1;
    x[i4] = diff_im + x[i2];
    x[i7] = diff_im - x[i2];

    let (hi, lo) = sum_diff(x[i1], sum_im);
    x[i1] = hi;
    x[i6] = lo;

    x[i2] = diff_re + x[i5];
    x[i5] = x[i5] - diff_re;
}
