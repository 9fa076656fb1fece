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
use crate::err::{SrfftError, validate_fft_size};

/// Writes `source` into `dest` in bit-reversed index order.
///
/// `dest[rev(i)] = source[i]`, where `rev` reverses the low `log2(n)` bits of `i`.
/// Both slices must have the same power-of-two length, at least 2.
pub fn reverse_bin_permute<T: Copy>(source: &[T], dest: &mut [T]) -> Result<(), SrfftError> {
    validate_fft_size(source.len())?;
    if dest.len() != source.len() {
        return Err(SrfftError::InvalidOutputLength(source.len(), dest.len()));
    }
    revbin_permute(source, dest);
    Ok(())
}

/// Advances a bit-reversed counter by one, for a counter of `n` positions.
///
/// Flips bits from the top down until one of them turns on, which is
/// an increment carried in reversed bit order.
#[inline(always)]
fn revbin_increment(mut r: usize, n: usize) -> usize {
    let mut h = n;
    loop {
        h >>= 1;
        r ^= h;
        if r & h != 0 {
            return r;
        }
    }
}

/// Bit-reversal permutation with an incremental reversed counter.
///
/// Length must already be validated. Indices are visited in pairs: the odd
/// index `i` always swaps with a partner in the upper half, the even index
/// swaps with its reversed counterpart only when that has not been visited yet,
/// and its mirror `(n-1-i, n-1-r)` is handled in the same step.
pub(crate) fn revbin_permute<T: Copy>(source: &[T], dest: &mut [T]) {
    let n = source.len();
    let last = n - 1;

    dest[0] = source[0];
    dest[last] = source[last];
    if n == 2 {
        return;
    }

    let half = n >> 1;
    let mut i = 1;
    let mut r = 0;
    while i < half {
        r += half;
        dest[i] = source[r];
        dest[r] = source[i];
        i += 1;

        r = revbin_increment(r, n);
        if r >= i {
            dest[i] = source[r];
            dest[r] = source[i];

            dest[last - i] = source[last - r];
            dest[last - r] = source[last - i];
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn bit_reverse_indices(n: usize) -> Vec<usize> {
        let bits = n.trailing_zeros();
        (0..n)
            .map(|i| i.reverse_bits() >> (usize::BITS - bits))
            .collect()
    }

    #[test]
    fn test_matches_naive_bit_reversal() {
        for e in 1..13 {
            let size = 1usize << e;
            let source = (0..size).collect::<Vec<usize>>();
            let mut dest = vec![usize::MAX; size];
            reverse_bin_permute(&source, &mut dest).unwrap();
            let rev = bit_reverse_indices(size);
            for (i, &r) in rev.iter().enumerate() {
                assert_eq!(dest[r], source[i], "index {i} for size {size}");
            }
        }
    }

    #[test]
    fn test_small_orders() {
        let mut dest = [0usize; 2];
        reverse_bin_permute(&[0, 1], &mut dest).unwrap();
        assert_eq!(dest, [0, 1]);

        let mut dest = [0usize; 4];
        reverse_bin_permute(&[0, 1, 2, 3], &mut dest).unwrap();
        assert_eq!(dest, [0, 2, 1, 3]);

        let mut dest = [0usize; 8];
        reverse_bin_permute(&[0, 1, 2, 3, 4, 5, 6, 7], &mut dest).unwrap();
        assert_eq!(dest, [0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn test_permutation_is_involution() {
        for e in 1..17 {
            let size = 1usize << e;
            let mut source = vec![0f64; size];
            for z in source.iter_mut() {
                *z = rand::rng().random();
            }
            let mut once = vec![0f64; size];
            let mut twice = vec![0f64; size];
            reverse_bin_permute(&source, &mut once).unwrap();
            reverse_bin_permute(&once, &mut twice).unwrap();
            assert_eq!(source, twice, "involution failed for size {size}");
        }
    }

    #[test]
    fn test_rejects_invalid_sizes() {
        let mut dest = [0f32; 6];
        assert_eq!(
            reverse_bin_permute(&[0f32; 6], &mut dest),
            Err(SrfftError::NotPowerOfTwo(6))
        );
        let mut dest = [0f32; 1];
        assert_eq!(
            reverse_bin_permute(&[0f32; 1], &mut dest),
            Err(SrfftError::SizeTooSmall(1))
        );
        let mut dest = [0f32; 4];
        assert_eq!(
            reverse_bin_permute(&[0f32; 8], &mut dest),
            Err(SrfftError::InvalidOutputLength(8, 4))
        );
    }
}
