use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::fmt;
use core::str::FromStr;
use sha3::{Shake256, digest::{Update, ExtendableOutputReset, XofReader}};

use super::sgnw;
use crate::{CryptoRng, Error, RngCore, strip_hex_prefix};

/// Element of GF(2^191), using modulus 1 + z^9 + z^191.
///
/// The polynomial basis is used: bit `i` of the value is the coefficient
/// of `z^i`. Values are always fully reduced (degree at most 190), hence
/// two elements are equal if and only if their internal representations
/// are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GFb191([u64; 3]);

impl GFb191 {

    // IMPLEMENTATION NOTES
    // --------------------
    //
    // Three 64-bit limbs, little-endian. The top bit of the last limb
    // (bit 191) is always zero, on input and on output of every function;
    // constructors mask it out silently. Since the modulus is a trinomial
    // whose middle term has low degree, a reduction of z^191 is a shift
    // and two XORs: z^191 = z^9 + 1.

    pub const ZERO: Self = Self([ 0, 0, 0 ]);
    pub const ONE: Self = Self([ 1, 0, 0 ]);

    /// The modulus z^191 + z^9 + 1, over 192 bits (little-endian limbs).
    pub const MODULUS: [u64; 3] = [ 0x0000000000000201, 0, 0x8000000000000000 ];

    /// Size of the encoding of an element, in bytes.
    pub const ENC_LEN: usize = 24;

    /// Length of the canonical hexadecimal representation, in digits.
    pub const HEX_LEN: usize = 48;

    const TOPMASK: u64 = 0x7FFFFFFFFFFFFFFF;

    /// Build an element from three 64-bit limbs (little-endian order).
    /// Bit 191 and above are silently dropped.
    pub const fn w64le(x0: u64, x1: u64, x2: u64) -> Self {
        Self([ x0, x1, x2 & Self::TOPMASK ])
    }

    /// Build an element from three 64-bit limbs (big-endian order).
    /// Bit 191 and above are silently dropped.
    pub const fn w64be(x2: u64, x1: u64, x0: u64) -> Self {
        Self::w64le(x0, x1, x2)
    }

    #[inline(always)]
    pub const fn from_u64(x: u64) -> Self {
        Self([ x, 0, 0 ])
    }

    #[inline(always)]
    pub const fn from_u128(x: u128) -> Self {
        Self([ x as u64, (x >> 64) as u64, 0 ])
    }

    /// The additive identity.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// The multiplicative identity.
    #[inline(always)]
    pub const fn one() -> Self {
        Self::ONE
    }

    /// Get the three limbs of this value (little-endian order).
    #[inline(always)]
    pub fn to_w64le(self) -> [u64; 3] {
        self.0
    }

    /// Sample an element uniformly among the 2^191 field elements.
    pub fn random<T: CryptoRng + RngCore>(rng: &mut T) -> Self {
        let mut buf = [0u8; Self::ENC_LEN];
        rng.fill_bytes(&mut buf);
        let mut x = Self::ZERO;
        x.set_decode24_trunc(&buf);
        x
    }

    // Get the bit at the specified index. The index `k` MUST be between
    // 0 and 190 (inclusive). Side-channel attacks may reveal the value of
    // the index (but not the value of the read bit). Returned value is
    // 0 or 1.
    #[inline(always)]
    pub fn get_bit(self, k: usize) -> u32 {
        ((self.0[k >> 6] >> (k & 63)) as u32) & 1
    }

    // XOR (add) a one-bit value at the specified index. The index `k`
    // MUST be between 0 and 190 (inclusive). Only the least significant
    // bit of `val` is used.
    #[inline(always)]
    pub fn xor_bit(&mut self, k: usize, val: u32) {
        self.0[k >> 6] ^= ((val & 1) as u64) << (k & 63);
    }

    #[inline(always)]
    fn set_add(&mut self, rhs: &Self) {
        self.0[0] ^= rhs.0[0];
        self.0[1] ^= rhs.0[1];
        self.0[2] ^= rhs.0[2];
    }

    // Subtraction is the same thing as addition in binary fields.

    #[inline(always)]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        self.0[0] ^= cw & (self.0[0] ^ a.0[0]);
        self.0[1] ^= cw & (self.0[1] ^ a.0[1]);
        self.0[2] ^= cw & (self.0[2] ^ a.0[2]);
    }

    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    #[inline(always)]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        let t = cw & (a.0[0] ^ b.0[0]); a.0[0] ^= t; b.0[0] ^= t;
        let t = cw & (a.0[1] ^ b.0[1]); a.0[1] ^= t; b.0[1] ^= t;
        let t = cw & (a.0[2] ^ b.0[2]); a.0[2] ^= t; b.0[2] ^= t;
    }

    // Multiply this value by z^8 (in place).
    #[inline(always)]
    fn set_mul_z8(&mut self) {
        // Bits 183 to 190 are pushed to 191..198 and folded back with
        // z^191 = z^9 + 1.
        let (a0, a1, a2) = (self.0[0], self.0[1], self.0[2]);
        let h = a2 >> 55;
        self.0[0] = (a0 << 8) ^ h ^ (h << 9);
        self.0[1] = (a1 << 8) | (a0 >> 56);
        self.0[2] = ((a2 << 8) | (a1 >> 56)) & Self::TOPMASK;
    }

    #[inline]
    fn set_mul(&mut self, rhs: &Self) {
        // Right-to-left binary multiplication with interleaved reduction:
        // for each bit i of rhs (from least to most significant), the
        // running value a = self*z^i mod f is added to the accumulator
        // if that bit is set; then a is multiplied by z, and folded back
        // if it reached degree 191. No intermediate value exceeds 192
        // bits. All masks are computed without conditional jumps.
        let mut a = self.0;
        let b = rhs.0;
        let mut d = [0u64; 3];
        for i in 0..191 {
            let m = ((b[i >> 6] >> (i & 63)) & 1).wrapping_neg();
            d[0] ^= a[0] & m;
            d[1] ^= a[1] & m;
            d[2] ^= a[2] & m;

            let t2 = (a[2] << 1) | (a[1] >> 63);
            a[1] = (a[1] << 1) | (a[0] >> 63);
            a[0] <<= 1;
            let h = sgnw(t2);
            a[0] ^= h & Self::MODULUS[0];
            a[2] = t2 ^ (h & Self::MODULUS[2]);
        }
        self.0 = d;
    }

    // Reduce a 384-bit polynomial (six limbs, little-endian) modulo
    // z^191 + z^9 + 1.
    #[inline(always)]
    fn reduce384(c: &[u64; 6]) -> Self {
        // Write c = L + H*z^191 with L of degree at most 190. Then
        // c = L + H + H*z^9 mod f; H has at most 193 bits, so the
        // sum has degree at most 201, and a second (small) fold is
        // needed for the bits at 191 and above.
        let h0 = (c[2] >> 63) | (c[3] << 1);
        let h1 = (c[3] >> 63) | (c[4] << 1);
        let h2 = (c[4] >> 63) | (c[5] << 1);
        let h3 = c[5] >> 63;

        let t0 = c[0] ^ h0 ^ (h0 << 9);
        let t1 = c[1] ^ h1 ^ (h1 << 9) ^ (h0 >> 55);
        let t2 = (c[2] & Self::TOPMASK) ^ h2 ^ (h2 << 9) ^ (h1 >> 55);
        let t3 = h3 ^ (h3 << 9) ^ (h2 >> 55);

        // g has at most 11 bits.
        let g = (t2 >> 63) | (t3 << 1);
        Self([ t0 ^ g ^ (g << 9), t1, t2 & Self::TOPMASK ])
    }

    // Extract all even-indexed bits from the input and push them into
    // the low 32 bits of the result; the high 32 bits are set to 0.
    #[inline(always)]
    fn squeeze(x: u64) -> u64 {
        let x = (x & 0x1111111111111111) | ((x & 0x4444444444444444) >> 1);
        let x = (x & 0x0303030303030303) | ((x & 0x3030303030303030) >> 2);
        let x = (x & 0x000F000F000F000F) | ((x & 0x0F000F000F000F00) >> 4);
        let x = (x & 0x000000FF000000FF) | ((x & 0x00FF000000FF0000) >> 8);
        let x = (x & 0x000000000000FFFF) | ((x & 0x0000FFFF00000000) >> 16);
        x
    }

    // Square this value (in place).
    #[inline]
    pub fn set_square(&mut self) {
        // Spread the low 32 bits of x over 64 bits (bit i goes to 2*i).
        // Integer squaring of values with 4-bit spacing between data
        // bits does the spreading; cross terms land on odd positions or
        // are masked out, and no carry reaches the low 64 output bits.
        // High bits of x do not influence the output.
        #[inline(always)]
        fn expand_32(x: u64) -> u64 {
            #[inline(always)]
            fn sq_lo(x: u64) -> u64 {
                x.wrapping_mul(x)
            }

            let x0 = x & 0x1111111111111111;
            let x1 = x & 0x2222222222222222;
            let x2 = x & 0x4444444444444444;
            let x3 = x & 0x8888888888888888;
            let y0 = (sq_lo(x0) ^ sq_lo(x2)) & 0x1111111111111111;
            let y1 = (sq_lo(x1) ^ sq_lo(x3)) & 0x4444444444444444;
            y0 ^ y1
        }

        let (a0, a1, a2) = (self.0[0], self.0[1], self.0[2]);

        // Square the polynomial (degree at most 380).
        let c = [
            expand_32(a0), expand_32(a0 >> 32),
            expand_32(a1), expand_32(a1 >> 32),
            expand_32(a2), expand_32(a2 >> 32),
        ];

        *self = Self::reduce384(&c);
    }

    // Square this value.
    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
    #[inline]
    pub fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    // Square this value n times.
    #[inline]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    /// Inverse of this value, with the extended Euclidean algorithm over
    /// binary polynomials.
    ///
    /// The zero element has no inverse; `Error::DivisionByZero` is
    /// returned in that case. This function is NOT constant-time (the
    /// number of iterations depends on the value); `invert()` is the
    /// constant-time alternative.
    pub fn inverse(self) -> Result<Self, Error> {
        if self.iszero() != 0 {
            return Err(Error::DivisionByZero);
        }

        // Invariants: a = u*self mod f, and b = v*self mod f.
        let mut a = self.0;
        let mut b = Self::MODULUS;
        let mut u = [ 1u64, 0, 0 ];
        let mut v = [ 0u64; 3 ];
        while a != [ 1, 0, 0 ] {
            let la = bitlen(&a);

            // The modulus is irreducible, hence gcd(self, f) = 1, and a
            // cannot vanish before reaching 1.
            if la == 0 {
                unreachable!("GF(2^191) inversion: modulus is not irreducible");
            }

            let lb = bitlen(&b);
            if la < lb {
                core::mem::swap(&mut a, &mut b);
                core::mem::swap(&mut u, &mut v);
                continue;
            }
            let s = la - lb;
            xor_shifted(&mut a, &b, s);
            xor_shifted(&mut u, &v, s);
            a[2] &= Self::TOPMASK;
            u[2] &= Self::TOPMASK;
        }
        Ok(Self(u))
    }

    // Invert this value; if this value is zero, then it stays at zero.
    pub fn set_invert(&mut self) {
        // We use Itoh-Tsujii. We have:
        //   1/a = a^(2^191 - 2)
        //       = (a^2)^(2^190 - 1)
        // Let e(k) = b^(2^k - 1) with b = a^2; then
        // e(i + j) = e(i)^(2^j) * e(j). Addition chain for 190:
        //   1 -> 2 -> 4 -> 8 -> 16 -> 32 -> 64 -> 128 -> 160 -> 176
        //     -> 184 -> 188 -> 190
        let e1 = self.square();
        let e2 = e1 * e1.square();
        let e4 = e2 * e2.xsquare(2);
        let e8 = e4 * e4.xsquare(4);
        let e16 = e8 * e8.xsquare(8);
        let e32 = e16 * e16.xsquare(16);
        let e64 = e32 * e32.xsquare(32);
        let e128 = e64 * e64.xsquare(64);
        let e160 = e32 * e128.xsquare(32);
        let e176 = e16 * e160.xsquare(16);
        let e184 = e8 * e176.xsquare(8);
        let e188 = e4 * e184.xsquare(4);
        let e190 = e2 * e188.xsquare(2);
        *self = e190;
    }

    // Get the inverse of this value; the inverse of zero is formally
    // defined to be zero.
    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut x = self;
        x.set_invert();
        x
    }

    #[inline(always)]
    fn set_div(&mut self, y: &Self) {
        self.set_mul(&y.invert());
    }

    /// Raise this value to the power `e`.
    ///
    /// The exponent is an unsigned integer of arbitrary size, provided
    /// in little-endian order (an empty slice is the integer 0). The
    /// result for a zero exponent is one, including for a zero base.
    /// Right-to-left square-and-multiply is used; all exponent bits are
    /// processed with the same sequence of operations, so that only the
    /// exponent length may leak.
    pub fn power(self, e: &[u8]) -> Self {
        let mut r = Self::ONE;
        let mut b = self;
        for &x in e.iter() {
            for j in 0..8 {
                let ctl = (((x >> j) & 1) as u32).wrapping_neg();
                let t = r * b;
                r.set_cond(&t, ctl);
                b.set_square();
            }
        }
        r
    }

    /// Raise this value to the power `e` (64-bit exponent).
    #[inline]
    pub fn power_u64(self, e: u64) -> Self {
        self.power(&e.to_le_bytes())
    }

    // Set this value to its square root. In a binary field, all values
    // have a square root, and it is unique.
    #[inline]
    pub fn set_sqrt(&mut self) {
        // We split the input into "odd" and "even" parts:
        //    a = ae + z*ao
        // Then:
        //    sqrt(a) = sqrt(ae) + sqrt(z)*sqrt(ao)
        // Square roots of ae and ao are obtained by "squeezing" words.
        // With modulus z^191 + z^9 + 1, we have z = z^192 + z^10, hence
        // sqrt(z) = z^96 + z^5. sqrt(ao) has degree at most 94, so the
        // product by sqrt(z) has degree at most 190 and needs no
        // reduction.
        let (a0, a1, a2) = (self.0[0], self.0[1], self.0[2]);

        // sqrt(ae) = e0:e1 (96 bits)
        let e0 = Self::squeeze(a0) | (Self::squeeze(a1) << 32);
        let e1 = Self::squeeze(a2);

        // sqrt(ao) = o0:o1 (95 bits)
        let o0 = Self::squeeze(a0 >> 1) | (Self::squeeze(a1 >> 1) << 32);
        let o1 = Self::squeeze(a2 >> 1);

        // sqrt(a) = (e0 + e1*z^64) + (o0 + o1*z^64)*(z^5 + z^96)
        self.0[0] = e0 ^ (o0 << 5);
        self.0[1] = e1 ^ (o1 << 5) ^ (o0 >> 59) ^ (o0 << 32);
        self.0[2] = (o0 >> 32) ^ (o1 << 32);
    }

    // Compute the square root of this value.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        let mut x = self;
        x.set_sqrt();
        x
    }

    // Get the trace for this value (in GF(2^191)). This is 0 or 1.
    pub fn trace(self) -> u32 {
        // Tr(a) = \sum_{i=0}^{190} a^(2^i)
        let mut t = self;
        for _ in 0..190 {
            t = t.square() + self;
        }
        (t.0[0] as u32) & 1
    }

    // Set this value to its halftrace.
    pub fn set_halftrace(&mut self) {
        // H(a) = \sum_{i=0}^{95} a^(2^(2*i))
        // For odd degree fields, H(a)^2 + H(a) = a + Tr(a).
        let a = *self;
        for _ in 0..95 {
            self.set_xsquare(2);
            self.set_add(&a);
        }
    }

    // Get the halftrace of this value.
    #[inline(always)]
    pub fn halftrace(self) -> Self {
        let mut x = self;
        x.set_halftrace();
        x
    }

    // Equality check between two field elements (constant-time);
    // returned value is 0xFFFFFFFF on equality, 0x00000000 otherwise.
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> u32 {
        (self + rhs).iszero()
    }

    // Compare this value with zero (constant-time); returned value
    // is 0xFFFFFFFF if this element is zero, 0x00000000 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        let t = self.0[0] | self.0[1] | self.0[2];
        (((t | t.wrapping_neg()) >> 63) as u32).wrapping_sub(1)
    }

    #[inline(always)]
    pub fn encode(self) -> [u8; 24] {
        let mut d = [0u8; 24];
        d[..8].copy_from_slice(&self.0[0].to_le_bytes());
        d[8..16].copy_from_slice(&self.0[1].to_le_bytes());
        d[16..].copy_from_slice(&self.0[2].to_le_bytes());
        d
    }

    // Decode the value from bytes, ignoring bit 191. Input MUST be of
    // length 24 bytes exactly.
    #[inline]
    fn set_decode24_trunc(&mut self, buf: &[u8]) {
        debug_assert!(buf.len() == 24);
        let mut w = [0u64; 3];
        for (i, wi) in w.iter_mut().enumerate() {
            let mut t = [0u8; 8];
            t.copy_from_slice(&buf[(8 * i)..(8 * i + 8)]);
            *wi = u64::from_le_bytes(t);
        }
        self.0 = [ w[0], w[1], w[2] & Self::TOPMASK ];
    }

    // Decode the value from bytes. If the input is invalid (i.e. the
    // input length is not exactly 24 bytes, or the top bit of the last
    // byte is not zero), then this value is set to zero and 0x00000000
    // is returned. Otherwise, the decoding succeeds, and 0xFFFFFFFF is
    // returned.
    #[inline]
    pub fn set_decode_ct(&mut self, buf: &[u8]) -> u32 {
        if buf.len() != 24 {
            *self = Self::ZERO;
            return 0;
        }
        self.set_decode24_trunc(buf);
        let m = !sgnw((buf[23] as u64) << 56);
        self.0[0] &= m;
        self.0[1] &= m;
        self.0[2] &= m;
        m as u32
    }

    // Decode a value from bytes. If the input is invalid (i.e. the
    // input length is not exactly 24 bytes, or the top bit of the last
    // byte is not zero), then this returns zero and 0x00000000.
    // Otherwise, the decoded value and 0xFFFFFFFF are returned.
    #[inline]
    pub fn decode_ct(buf: &[u8]) -> (Self, u32) {
        let mut x = Self::ZERO;
        let r = x.set_decode_ct(buf);
        (x, r)
    }

    // Decode a value from bytes. If the input is invalid (i.e. the
    // input length is not exactly 24 bytes, or the top bit of the last
    // byte is not zero), then this returns `None`; otherwise, the decoded
    // value is returned. Side-channel analysis may reveal to outsiders
    // whether the decoding succeeded.
    #[inline]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (x, r) = Self::decode_ct(buf);
        if r != 0 {
            Some(x)
        } else {
            None
        }
    }

    /// Decode some bytes as a binary polynomial (unsigned little-endian
    /// convention: bit `j` of byte `i` is the coefficient of `z^(8*i+j)`)
    /// and reduce it modulo z^191 + z^9 + 1. Any input length is
    /// accepted; only the length may leak through side channels.
    pub fn decode_reduce(buf: &[u8]) -> Self {
        let mut r = Self::ZERO;
        for &b in buf.iter().rev() {
            r.set_mul_z8();
            r.0[0] ^= b as u64;
        }
        r
    }

    /// Map arbitrary data to a field element: SHAKE256 of the data,
    /// with a 48-byte output, reduced with `decode_reduce()`.
    pub fn hash_to_field(data: &[u8]) -> Self {
        let mut sh = Shake256::default();
        sh.update(data);
        let mut hh = [0u8; 48];
        sh.finalize_xof_reset().read(&mut hh);
        Self::decode_reduce(&hh)
    }

    /// Canonical text representation: 48 uppercase hexadecimal digits
    /// (ASCII), most significant first, zero-padded, without prefix.
    pub fn to_canonical_hex(self) -> [u8; Self::HEX_LEN] {
        const HEXUP: &[u8; 16] = b"0123456789ABCDEF";
        let mut d = [0u8; Self::HEX_LEN];
        for (i, c) in d.iter_mut().enumerate() {
            let k = (Self::HEX_LEN - 1 - i) << 2;
            let nib = (self.0[k >> 6] >> (k & 63)) & 0x0F;
            *c = HEXUP[nib as usize];
        }
        d
    }

    /// Parse a hexadecimal string (optional `0x` prefix, any number of
    /// leading zeros). Values of 2^191 or more are rejected, and so are
    /// empty strings and non-hexadecimal characters. This function is
    /// not constant-time.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let s = strip_hex_prefix(s);
        if s.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut r = [0u64; 3];
        for c in s.chars() {
            let d = c.to_digit(16).ok_or(Error::InvalidHexDigit(c))? as u64;
            if (r[2] >> 59) != 0 {
                return Err(Error::ValueTooLarge);
            }
            r[2] = (r[2] << 4) | (r[1] >> 60);
            r[1] = (r[1] << 4) | (r[0] >> 60);
            r[0] = (r[0] << 4) | d;
        }
        Ok(Self(r))
    }
}

// Length (in bits) of a polynomial over 192 bits; 0 for zero. This is
// not constant-time.
fn bitlen(x: &[u64; 3]) -> u32 {
    for i in (0..3).rev() {
        if x[i] != 0 {
            return ((i as u32) << 6) + 64 - x[i].leading_zeros();
        }
    }
    0
}

// d <- d + x*z^k, truncated to 192 bits.
fn xor_shifted(d: &mut [u64; 3], x: &[u64; 3], k: u32) {
    let wk = (k >> 6) as usize;
    let bk = k & 63;
    for i in wk..3 {
        let j = i - wk;
        let mut w = x[j] << bk;
        if bk != 0 && j > 0 {
            w |= x[j - 1] >> (64 - bk);
        }
        d[i] ^= w;
    }
}

impl fmt::Display for GFb191 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.to_canonical_hex();
        f.write_str(core::str::from_utf8(&h).map_err(|_| fmt::Error)?)
    }
}

impl fmt::UpperHex for GFb191 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for GFb191 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_hex(s)
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+, *, /...) on field element instances, with or without references.

impl Add<GFb191> for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn add(self, other: GFb191) -> GFb191 {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&GFb191> for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn add(self, other: &GFb191) -> GFb191 {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Add<GFb191> for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn add(self, other: GFb191) -> GFb191 {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Add<&GFb191> for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn add(self, other: &GFb191) -> GFb191 {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl AddAssign<GFb191> for GFb191 {
    #[inline(always)]
    fn add_assign(&mut self, other: GFb191) {
        self.set_add(&other);
    }
}

impl AddAssign<&GFb191> for GFb191 {
    #[inline(always)]
    fn add_assign(&mut self, other: &GFb191) {
        self.set_add(other);
    }
}

impl Div<GFb191> for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn div(self, other: GFb191) -> GFb191 {
        let mut r = self;
        r.set_div(&other);
        r
    }
}

impl Div<&GFb191> for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn div(self, other: &GFb191) -> GFb191 {
        let mut r = self;
        r.set_div(other);
        r
    }
}

impl Div<GFb191> for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn div(self, other: GFb191) -> GFb191 {
        let mut r = *self;
        r.set_div(&other);
        r
    }
}

impl Div<&GFb191> for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn div(self, other: &GFb191) -> GFb191 {
        let mut r = *self;
        r.set_div(other);
        r
    }
}

impl DivAssign<GFb191> for GFb191 {
    #[inline(always)]
    fn div_assign(&mut self, other: GFb191) {
        self.set_div(&other);
    }
}

impl DivAssign<&GFb191> for GFb191 {
    #[inline(always)]
    fn div_assign(&mut self, other: &GFb191) {
        self.set_div(other);
    }
}

impl Mul<GFb191> for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn mul(self, other: GFb191) -> GFb191 {
        let mut r = self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&GFb191> for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn mul(self, other: &GFb191) -> GFb191 {
        let mut r = self;
        r.set_mul(other);
        r
    }
}

impl Mul<GFb191> for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn mul(self, other: GFb191) -> GFb191 {
        let mut r = *self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&GFb191> for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn mul(self, other: &GFb191) -> GFb191 {
        let mut r = *self;
        r.set_mul(other);
        r
    }
}

impl MulAssign<GFb191> for GFb191 {
    #[inline(always)]
    fn mul_assign(&mut self, other: GFb191) {
        self.set_mul(&other);
    }
}

impl MulAssign<&GFb191> for GFb191 {
    #[inline(always)]
    fn mul_assign(&mut self, other: &GFb191) {
        self.set_mul(other);
    }
}

impl Neg for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn neg(self) -> GFb191 {
        self
    }
}

impl Neg for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn neg(self) -> GFb191 {
        *self
    }
}

impl Sub<GFb191> for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn sub(self, other: GFb191) -> GFb191 {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Sub<&GFb191> for GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn sub(self, other: &GFb191) -> GFb191 {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Sub<GFb191> for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn sub(self, other: GFb191) -> GFb191 {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Sub<&GFb191> for &GFb191 {
    type Output = GFb191;

    #[inline(always)]
    fn sub(self, other: &GFb191) -> GFb191 {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl SubAssign<GFb191> for GFb191 {
    #[inline(always)]
    fn sub_assign(&mut self, other: GFb191) {
        self.set_add(&other);
    }
}

impl SubAssign<&GFb191> for GFb191 {
    #[inline(always)]
    fn sub_assign(&mut self, other: &GFb191) {
        self.set_add(other);
    }
}

// ========================================================================

#[cfg(all(test, feature = "std"))]
mod tests {

    use super::GFb191;
    use crate::{CryptoRng, Error, RngCore, RngError};
    use num_bigint::BigUint;
    use sha2::{Sha256, Sha512, Digest};
    use std::string::String;

    /*
    fn print(name: &str, v: GFb191) {
        print!("{} = K(0)", name);
        for i in 0..191 {
            if v.get_bit(i) != 0 {
                print!(" + z**{}", i);
            }
        }
        println!();
    }
    */

    // A pretend RNG for test purposes (deterministic from a given seed).
    struct DRNG {
        buf: [u8; 64],
        ptr: usize,
    }

    impl DRNG {

        fn from_seed(seed: &[u8]) -> Self {
            let mut d = Self {
                buf: [0u8; 64],
                ptr: 0,
            };
            let mut sh = Sha512::new();
            sh.update(seed);
            d.buf[..].copy_from_slice(&sh.finalize());
            d
        }
    }

    impl RngCore for DRNG {

        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let len = dest.len();
            let mut off = 0;
            while off < len {
                let mut clen = 32 - self.ptr;
                if clen > (len - off) {
                    clen = len - off;
                }
                dest[off .. off + clen].copy_from_slice(
                    &self.buf[self.ptr .. self.ptr + clen]);
                self.ptr += clen;
                off += clen;
                if self.ptr == 32 {
                    let mut sh = Sha512::new();
                    sh.update(&self.buf);
                    self.buf[..].copy_from_slice(&sh.finalize());
                    self.ptr = 0;
                }
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8])
            -> Result<(), RngError>
        {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for DRNG { }

    // Reference model: binary polynomials as little-endian byte arrays.

    fn norm(v: &[u8]) -> [u8; 24] {
        let mut w = [0u8; 24];
        w[..].copy_from_slice(v);
        w[23] &= 0x7F;
        w
    }

    fn add(wa: &[u8], wb: &[u8]) -> [u8; 24] {
        let mut wc = [0u8; 24];
        for i in 0..24 {
            wc[i] = wa[i] ^ wb[i];
        }
        norm(&wc)
    }

    // Reduce a polynomial over 48 bytes by clearing set bits from the
    // top down, adding f*z^(i - 191) for each.
    fn reduce(zd: &mut [u8; 48]) -> [u8; 24] {
        for i in (191..384).rev() {
            let td = (zd[i >> 3] >> (i & 7)) & 1;
            zd[i >> 3] ^= td << (i & 7);
            zd[(i - 182) >> 3] ^= td << ((i - 182) & 7);
            zd[(i - 191) >> 3] ^= td << ((i - 191) & 7);
        }
        let mut wc = [0u8; 24];
        wc[..].copy_from_slice(&zd[..24]);
        wc
    }

    fn mul(wa: &[u8], wb: &[u8]) -> [u8; 24] {
        let wa = norm(wa);
        let wb = norm(wb);
        let mut zd = [0u8; 48];
        for i in 0..191 {
            for j in 0..191 {
                let ta = (wa[i >> 3] >> (i & 7)) & 1;
                let tb = (wb[j >> 3] >> (j & 7)) & 1;
                zd[(i + j) >> 3] ^= (ta & tb) << ((i + j) & 7);
            }
        }
        reduce(&mut zd)
    }

    // Same product, computed with num-bigint integers used as GF(2)[z]
    // bit vectors (XOR and shifts only).
    fn mul_bigint(wa: &[u8], wb: &[u8]) -> [u8; 24] {
        let za = BigUint::from_bytes_le(&norm(wa));
        let zb = BigUint::from_bytes_le(&norm(wb));
        let zf = (BigUint::from(1u32) << 191usize)
            ^ (BigUint::from(1u32) << 9usize) ^ BigUint::from(1u32);
        let mut zc = BigUint::from(0u32);
        for i in 0..191u64 {
            if zb.bit(i) {
                zc ^= &za << (i as usize);
            }
        }
        for i in (191..382u64).rev() {
            if zc.bit(i) {
                zc ^= &zf << ((i - 191) as usize);
            }
        }
        let mut wc = [0u8; 24];
        let vc = zc.to_bytes_le();
        wc[..vc.len()].copy_from_slice(&vc);
        wc
    }

    fn iszero_bytes(v: &[u8]) -> bool {
        v.iter().all(|&x| x == 0)
    }

    // va and vb must be 24 bytes each in length
    fn check_gfb191_ops(va: &[u8], vb: &[u8]) {
        let mut a = GFb191::ZERO;
        a.set_decode24_trunc(va);
        let mut b = GFb191::ZERO;
        b.set_decode24_trunc(vb);

        let vc = a.encode();
        assert!(vc == norm(va));
        let vc = b.encode();
        assert!(vc == norm(vb));
        let bz = iszero_bytes(&vc);

        let c = a + b;
        let vc = c.encode();
        assert!(vc == add(va, vb));

        let c = a - b;
        let vc = c.encode();
        assert!(vc == add(va, vb));

        let c = -a;
        assert!(c == a);

        let c = a * b;
        let vc = c.encode();
        assert!(vc == mul(va, vb));
        assert!(vc == mul_bigint(va, vb));
        assert!(c == b * a);

        let c = a.square();
        let vc = c.encode();
        assert!(vc == mul(va, va));
        assert!(c == a * a);

        let c = a / b;
        if bz {
            assert!(b.iszero() == 0xFFFFFFFF);
            assert!(c.iszero() == 0xFFFFFFFF);
            assert!(b.inverse() == Err(Error::DivisionByZero));
        } else {
            assert!(b.iszero() == 0x00000000);
            let d = c * b;
            let vd = d.encode();
            assert!(vd == norm(va));
            assert!(d.equals(a) == 0xFFFFFFFF);

            let ib = b.inverse().unwrap();
            assert!(ib == b.invert());
            assert!(b * ib == GFb191::ONE);
        }

        let c = a.sqrt();
        let d = c.square();
        assert!(d.equals(a) == 0xFFFFFFFF);

        let tra = a.trace();
        assert!(tra <= 1);
        assert!((a + b).trace() == tra ^ b.trace());
        let c = a.halftrace();
        let d = c.square() + c;
        if tra == 0 {
            assert!(d.equals(a) == 0xFFFFFFFF);
        } else {
            assert!((d + a + GFb191::ONE).iszero() == 0xFFFFFFFF);
        }
    }

    #[test]
    fn gfb191_ops() {
        let mut va = [0u8; 24];
        let mut vb = [0u8; 24];
        check_gfb191_ops(&va, &vb);
        va[0] = 0x01;
        check_gfb191_ops(&va, &vb);
        vb[0] = 0x02;
        check_gfb191_ops(&va, &vb);
        vb[23] = 0x40;
        check_gfb191_ops(&va, &vb);
        for i in 0..24 {
            va[i] = 0xFF;
            vb[i] = 0xFF;
        }
        check_gfb191_ops(&va, &vb);
        va[23] &= 0x7F;
        vb[23] = 0x80;
        check_gfb191_ops(&va, &vb);

        let mut sh = Sha256::new();
        for i in 0..200 {
            sh.update((i as u64).to_le_bytes());
            let vh1 = sh.finalize_reset();
            sh.update((i as u64).to_le_bytes());
            sh.update(&[0x01u8]);
            let vh2 = sh.finalize_reset();
            let mut va = [0u8; 24];
            let mut vb = [0u8; 24];
            va[..].copy_from_slice(&vh1[..24]);
            vb[..8].copy_from_slice(&vh1[24..]);
            vb[8..].copy_from_slice(&vh2[..16]);
            check_gfb191_ops(&va, &vb);
        }
    }

    #[test]
    fn gfb191_identities() {
        let mut rng = DRNG::from_seed(b"gfb191 identities");
        assert!(GFb191::ZERO + GFb191::ZERO == GFb191::ZERO);
        assert!(GFb191::ONE.square() == GFb191::ONE);
        assert!(GFb191::zero() == GFb191::ZERO);
        assert!(GFb191::one() == GFb191::ONE);
        for _ in 0..50 {
            let a = GFb191::random(&mut rng);
            let b = GFb191::random(&mut rng);
            let c = GFb191::random(&mut rng);

            assert!(a + a == GFb191::ZERO);
            assert!(a + GFb191::ZERO == a);
            assert!((a + b) + c == a + (b + c));
            assert!(a * GFb191::ONE == a);
            assert!(a * GFb191::ZERO == GFb191::ZERO);
            assert!((a * b) * c == a * (b * c));
            assert!((a + b) * c == a * c + b * c);

            let s = a.square();
            assert!(s * s == s.square());
            assert!(a.xsquare(3) == a.square().square().square());

            assert!(GFb191::select(&a, &b, 0) == a);
            assert!(GFb191::select(&a, &b, 0xFFFFFFFF) == b);
            let (mut x, mut y) = (a, b);
            GFb191::cswap(&mut x, &mut y, 0);
            assert!(x == a && y == b);
            GFb191::cswap(&mut x, &mut y, 0xFFFFFFFF);
            assert!(x == b && y == a);

            let [x0, x1, x2] = a.to_w64le();
            assert!(GFb191::w64be(x2, x1, x0) == a);
            assert!(GFb191::w64le(x0, x1, x2) == a);
            let v = (x0 as u128) | ((x1 as u128) << 64);
            assert!(GFb191::from_u128(v) == GFb191::w64le(x0, x1, 0));
            assert!(GFb191::from_u128(v) == GFb191::w64le(v as u64, (v >> 64) as u64, 0));

            let mut x = a;
            x *= b;
            x += c;
            x -= c;
            x /= b;
            if b.iszero() == 0 {
                assert!(x == a);
            }
        }
    }

    #[test]
    fn gfb191_vectors() {
        // Elements given in big-endian hexadecimal.
        fn from_be_hex(s: &str) -> GFb191 {
            let mut buf = hex::decode(s).unwrap();
            buf.reverse();
            GFb191::decode(&buf).unwrap()
        }

        let z = GFb191::from_u64(2);
        assert!(GFb191::ONE * z == z);

        // z^190 * z = z^191 = z^9 + 1
        let z190 = GFb191::w64le(0, 0, 0x4000000000000000);
        assert!(z190 * z == GFb191::from_u64(0x201));

        // (z^190)^2 = z^380 = z^189 + z^16 + z^7
        let c = from_be_hex("200000000000000000000000000000000000000000010080");
        assert!(z190.square() == c);

        // 1/z = z^190 + z^8
        let c = from_be_hex("400000000000000000000000000000000000000000000100");
        assert!(z.inverse().unwrap() == c);
        assert!(z.invert() == c);

        // sqrt(z) = z^96 + z^5
        let c = from_be_hex("000000000000000000000001000000000000000000000020");
        assert!(z.sqrt() == c);
        assert!(z.sqrt() == z.xsquare(190));

        assert!(GFb191::ONE.trace() == 1);
        assert!(GFb191::ZERO.trace() == 0);
    }

    #[test]
    fn gfb191_inverse() {
        assert!(GFb191::ZERO.inverse() == Err(Error::DivisionByZero));
        assert!(GFb191::ZERO.invert() == GFb191::ZERO);
        assert!(GFb191::ONE.inverse() == Ok(GFb191::ONE));

        let mut rng = DRNG::from_seed(b"gfb191 inverse");
        for _ in 0..100 {
            let a = GFb191::random(&mut rng);
            if a.iszero() != 0 {
                continue;
            }
            let ia = a.inverse().unwrap();
            assert!(a * ia == GFb191::ONE);
            assert!(ia == a.invert());
            assert!(ia.inverse().unwrap() == a);
        }

        // Sparse and extreme values.
        for k in 0..191 {
            let mut a = GFb191::ZERO;
            a.xor_bit(k, 1);
            assert!(a * a.inverse().unwrap() == GFb191::ONE);
            a.xor_bit(0, 1);
            if a.iszero() == 0 {
                assert!(a * a.inverse().unwrap() == GFb191::ONE);
            }
        }
        let a = GFb191::w64le(!0, !0, !0);
        assert!(a * a.inverse().unwrap() == GFb191::ONE);
    }

    #[test]
    fn gfb191_power() {
        let mut rng = DRNG::from_seed(b"gfb191 power");
        assert!(GFb191::ZERO.power(&[]) == GFb191::ONE);
        assert!(GFb191::ZERO.power_u64(0) == GFb191::ONE);
        assert!(GFb191::ZERO.power_u64(5) == GFb191::ZERO);

        let order = (BigUint::from(1u32) << 191usize) - BigUint::from(1u32);
        for _ in 0..20 {
            let a = GFb191::random(&mut rng);
            assert!(a.power(&[]) == GFb191::ONE);
            assert!(a.power_u64(0) == GFb191::ONE);
            assert!(a.power_u64(1) == a);
            assert!(a.power_u64(2) == a.square());
            assert!(a.power_u64(3) == a * a * a);
            assert!(GFb191::ONE.power_u64(rng.next_u64()) == GFb191::ONE);

            // a^(m + n) = a^m * a^n, with exponents larger than the
            // field size.
            let mut em = [0u8; 40];
            let mut en = [0u8; 33];
            rng.fill_bytes(&mut em);
            rng.fill_bytes(&mut en);
            let zm = BigUint::from_bytes_le(&em);
            let zn = BigUint::from_bytes_le(&en);
            let zmn = &zm + &zn;
            let c = a.power(&zmn.to_bytes_le());
            assert!(c == a.power(&em) * a.power(&en));

            // Trailing zero bytes do not change the exponent.
            let mut ew = [0u8; 48];
            ew[..40].copy_from_slice(&em);
            assert!(a.power(&ew) == a.power(&em));

            // a^(2^191 - 1) = 1 for non-zero a; a^(2^191) = a.
            if a.iszero() == 0 {
                assert!(a.power(&order.to_bytes_le()) == GFb191::ONE);
                let zq = &order + BigUint::from(1u32);
                assert!(a.power(&zq.to_bytes_le()) == a);
                let zq2 = &order - BigUint::from(1u32);
                assert!(a.power(&zq2.to_bytes_le()) == a.invert());
            }
        }
    }

    #[test]
    fn gfb191_random() {
        let mut rng = DRNG::from_seed(b"gfb191 random");
        let mut hi = 0;
        let mut prev = GFb191::ZERO;
        for _ in 0..100 {
            let a = GFb191::random(&mut rng);
            assert!((a.to_w64le()[2] >> 63) == 0);
            hi += a.get_bit(190);
            assert!(a != prev);
            prev = a;
        }
        assert!(hi > 20 && hi < 80);
    }

    #[test]
    fn gfb191_encode_decode() {
        let mut rng = DRNG::from_seed(b"gfb191 encode");
        for _ in 0..50 {
            let a = GFb191::random(&mut rng);
            let buf = a.encode();
            assert!(GFb191::decode(&buf) == Some(a));
            assert!(GFb191::decode_reduce(&buf) == a);

            let mut bad = buf;
            bad[23] |= 0x80;
            let (x, r) = GFb191::decode_ct(&bad);
            assert!(r == 0);
            assert!(x == GFb191::ZERO);
            assert!(GFb191::decode(&bad).is_none());
            assert!(GFb191::decode(&buf[..23]).is_none());

            // z^191 = z^9 + 1
            assert!(GFb191::decode_reduce(&bad) == a + GFb191::from_u64(0x201));

            // Long inputs: hi*z^192 + lo
            let mut buf2 = [0u8; 48];
            buf2[..24].copy_from_slice(&buf);
            let b = GFb191::random(&mut rng);
            buf2[24..].copy_from_slice(&b.encode());
            let zz192 = GFb191::from_u64(0x402);
            assert!(GFb191::decode_reduce(&buf2) == a + b * zz192);
        }
        assert!(GFb191::decode_reduce(&[]) == GFb191::ZERO);

        let c = GFb191::hash_to_field(b"test");
        assert!(c == GFb191::hash_to_field(b"test"));
        assert!(c != GFb191::hash_to_field(b"tesu"));
    }

    #[test]
    fn gfb191_hex() {
        assert!(format!("{}", GFb191::ZERO) == "0".repeat(48));
        assert!(format!("{}", GFb191::ONE)
            == "000000000000000000000000000000000000000000000001");
        let a = GFb191::w64le(0xFEDCBA9876543210, 0x0123456789ABCDEF,
            0x7FFFFFFFFFFFFFFF);
        let s = "7FFFFFFFFFFFFFFF0123456789ABCDEFFEDCBA9876543210";
        assert!(format!("{}", a) == s);
        assert!(format!("{:X}", a) == s);
        assert!(&a.to_canonical_hex()[..] == s.as_bytes());
        assert!(GFb191::from_hex(s) == Ok(a));
        assert!(s.parse::<GFb191>() == Ok(a));
        assert!(GFb191::from_hex(&s.to_lowercase()) == Ok(a));
        assert!(GFb191::from_hex("0x1") == Ok(GFb191::ONE));
        assert!(GFb191::from_hex(&"0".repeat(100)) == Ok(GFb191::ZERO));

        assert!(GFb191::from_hex("") == Err(Error::EmptyInput));
        assert!(GFb191::from_hex("0x") == Err(Error::EmptyInput));
        assert!(GFb191::from_hex("12G4") == Err(Error::InvalidHexDigit('G')));
        let mut big = String::from("8");
        big.push_str(&"0".repeat(47));
        assert!(GFb191::from_hex(&big) == Err(Error::ValueTooLarge));
        let mut big = String::from("1");
        big.push_str(&"0".repeat(48));
        assert!(GFb191::from_hex(&big) == Err(Error::ValueTooLarge));

        let mut sh = Sha256::new();
        for i in 0..50 {
            sh.update((i as u64).to_le_bytes());
            let vh = sh.finalize_reset();
            let a = GFb191::decode_reduce(&vh);
            let s = format!("{}", a);
            assert!(s.len() == GFb191::HEX_LEN);
            assert!(GFb191::from_hex(&s) == Ok(a));
            let za = BigUint::from_bytes_le(&a.encode());
            assert!(u128::from_str_radix(&s[16..], 16).unwrap()
                == (a.to_w64le()[0] as u128) | ((a.to_w64le()[1] as u128) << 64));
            assert!(BigUint::parse_bytes(s.as_bytes(), 16).unwrap() == za);
        }
    }
}
