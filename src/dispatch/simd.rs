//! Vectorized byte scan for the flat child table.
//!
//! Finds the position of a byte inside a node's key array, first match
//! wins. Wide nodes (the root of a tree over a large alphabet) are
//! where the vector paths pay off; narrow nodes go straight to the
//! scalar scan.
//!
//! # Architecture Support
//!
//! - **`x86_64`** with AVX2 (runtime detection): 32 keys per compare,
//!   byte-wise move-mask, position from trailing zeros
//! - **`x86_64`** with SSE2 (baseline): 16 keys per compare, any-match
//!   reduction, then a 16-byte scalar rescan of the hit block
//! - **`aarch64`** with NEON (baseline): 16 keys per compare, same
//!   rescan scheme
//! - **Other**: scalar scan
//!
//! All paths return identical results; the vector paths are an
//! optimization, never a correctness requirement.

/// Keys per 128-bit compare.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
const LANES_128: usize = 16;

/// Keys per 256-bit compare.
#[cfg(target_arch = "x86_64")]
const LANES_256: usize = 32;

// ============================================================================
//  Dispatch
// ============================================================================

/// Find the first index where `keys[i] == needle`, or `None`.
///
/// Picks the widest compare the table size and hardware allow: the
/// 32-lane path for ≥32 keys on AVX2, the 16-lane path for ≥16 keys,
/// scalar otherwise.
#[inline]
#[must_use]
pub fn find_byte(keys: &[u8], needle: u8) -> Option<usize> {
    #[cfg(target_arch = "x86_64")]
    {
        if keys.len() >= LANES_256 && is_x86_feature_detected!("avx2") {
            // SAFETY: AVX2 availability was just checked
            return unsafe { find_byte_avx2(keys, needle) };
        }
        if keys.len() >= LANES_128 {
            // SAFETY: SSE2 is baseline on x86_64
            return unsafe { find_byte_sse2(keys, needle) };
        }
        return find_byte_scalar(keys, needle);
    }

    #[cfg(target_arch = "aarch64")]
    {
        if keys.len() >= LANES_128 {
            // SAFETY: NEON is baseline on aarch64
            return unsafe { find_byte_neon(keys, needle) };
        }
        return find_byte_scalar(keys, needle);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        find_byte_scalar(keys, needle)
    }
}

// ============================================================================
//  Scalar Fallback (always available)
// ============================================================================

/// Scalar scan, first match wins. Used for tails, sub-threshold tables,
/// and architectures without a vector path.
#[inline]
#[must_use]
pub fn find_byte_scalar(keys: &[u8], needle: u8) -> Option<usize> {
    keys.iter().position(|&key| key == needle)
}

// ============================================================================
//  SSE2 Implementation (x86_64, baseline)
// ============================================================================

#[cfg(target_arch = "x86_64")]
mod sse2_impl {
    use std::arch::x86_64::{_mm_cmpeq_epi8, _mm_loadu_si128, _mm_movemask_epi8, _mm_set1_epi8};

    use super::LANES_128;

    /// 128-bit scan: compare 16 keys per block, reduce to an any-match
    /// test, then recover the exact lane with a short scalar rescan.
    ///
    /// # Safety
    /// Caller must ensure the code runs on `x86_64` (SSE2 is baseline).
    #[inline]
    #[target_feature(enable = "sse2")]
    #[allow(clippy::cast_possible_wrap)]
    #[allow(clippy::indexing_slicing)]
    pub unsafe fn find_byte_sse2(keys: &[u8], needle: u8) -> Option<usize> {
        let len = keys.len();

        unsafe {
            // Broadcast the needle to all 16 lanes.
            let needle_vec = _mm_set1_epi8(needle as i8);
            let mut i = 0;

            while i + LANES_128 <= len {
                let block = _mm_loadu_si128(keys.as_ptr().add(i).cast());
                let eq = _mm_cmpeq_epi8(block, needle_vec);

                if _mm_movemask_epi8(eq) != 0 {
                    // Hit somewhere in this block; a 16-byte rescan
                    // pins down the lane.
                    for j in 0..LANES_128 {
                        if keys[i + j] == needle {
                            return Some(i + j);
                        }
                    }
                }

                i += LANES_128;
            }

            // Tail
            while i < len {
                if keys[i] == needle {
                    return Some(i);
                }
                i += 1;
            }

            None
        }
    }
}

#[cfg(target_arch = "x86_64")]
use sse2_impl::find_byte_sse2;

// ============================================================================
//  AVX2 Implementation (x86_64, runtime detection)
// ============================================================================

#[cfg(target_arch = "x86_64")]
mod avx2_impl {
    use std::arch::x86_64::{
        _mm256_cmpeq_epi8, _mm256_loadu_si256, _mm256_movemask_epi8, _mm256_set1_epi8,
    };

    use super::LANES_256;

    /// 256-bit scan: compare 32 keys per block and extract a byte-wise
    /// move-mask; the count of trailing zeros is the matching lane.
    ///
    /// # Safety
    /// Caller must ensure AVX2 is available (`is_x86_feature_detected!`).
    #[inline]
    #[target_feature(enable = "avx2")]
    #[allow(clippy::cast_possible_wrap)]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::indexing_slicing)]
    pub unsafe fn find_byte_avx2(keys: &[u8], needle: u8) -> Option<usize> {
        let len = keys.len();

        unsafe {
            let needle_vec = _mm256_set1_epi8(needle as i8);
            let mut i = 0;

            while i + LANES_256 <= len {
                let block = _mm256_loadu_si256(keys.as_ptr().add(i).cast());
                let eq = _mm256_cmpeq_epi8(block, needle_vec);
                let mask = _mm256_movemask_epi8(eq) as u32;

                if mask != 0 {
                    return Some(i + mask.trailing_zeros() as usize);
                }

                i += LANES_256;
            }

            // Tail
            while i < len {
                if keys[i] == needle {
                    return Some(i);
                }
                i += 1;
            }

            None
        }
    }
}

#[cfg(target_arch = "x86_64")]
use avx2_impl::find_byte_avx2;

// ============================================================================
//  NEON Implementation (aarch64, baseline)
// ============================================================================

#[cfg(target_arch = "aarch64")]
mod neon_impl {
    use std::arch::aarch64::{vceqq_u8, vdupq_n_u8, vld1q_u8, vmaxvq_u8};

    use super::LANES_128;

    /// 128-bit scan via NEON: byte equality plus a horizontal max as
    /// the any-match reduction, then a 16-byte rescan on a hit.
    ///
    /// # Safety
    /// Caller must ensure NEON is available (baseline on `aarch64`).
    #[inline]
    #[target_feature(enable = "neon")]
    #[allow(clippy::indexing_slicing)]
    pub unsafe fn find_byte_neon(keys: &[u8], needle: u8) -> Option<usize> {
        let len = keys.len();

        unsafe {
            let needle_vec = vdupq_n_u8(needle);
            let mut i = 0;

            while i + LANES_128 <= len {
                let block = vld1q_u8(keys.as_ptr().add(i));
                let eq = vceqq_u8(block, needle_vec);

                // Max over the compare result is nonzero iff any lane
                // matched.
                if vmaxvq_u8(eq) != 0 {
                    for j in 0..LANES_128 {
                        if keys[i + j] == needle {
                            return Some(i + j);
                        }
                    }
                }

                i += LANES_128;
            }

            // Tail
            while i < len {
                if keys[i] == needle {
                    return Some(i);
                }
                i += 1;
            }

            None
        }
    }
}

#[cfg(target_arch = "aarch64")]
use neon_impl::find_byte_neon;

// ============================================================================
//  Tests
// ============================================================================
