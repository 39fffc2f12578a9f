/// The Bitcoin base58 alphabet: digits without `0`, uppercase without `I` and
/// `O`, lowercase without `l`.
pub(crate) const ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;

/// Lookup table for base58 decoding.
///
/// There are no aliases: `0`, `O`, `I` and `l` are not part of the alphabet
/// and decode as invalid.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 58 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Returns true if `byte` is a member of the base58 alphabet.
#[cfg(feature = "serde")]
pub(crate) fn in_alphabet(byte: u8) -> bool {
    LOOKUP[byte as usize] != NO_VALUE
}

/// Encodes a byte slice into a base58 string.
///
/// The input is treated as a single big-endian unsigned integer and
/// repeatedly divided by 58; remainders become digits, most significant
/// first. One alphabet zero character (`1`) is prepended per leading zero
/// byte of the input, preserving length information that the big-integer
/// view would otherwise drop.
///
/// The division runs over a byte buffer rather than a fixed-width integer so
/// the result is exact for any input length.
pub(crate) fn encode_base58(input: &[u8]) -> String {
    // Remainders land least-significant first; reversed at the end.
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut num = input.to_vec();
    while num.iter().any(|&b| b != 0) {
        let mut rem = 0_u32;
        for b in &mut num {
            let acc = (rem << 8) | u32::from(*b);
            *b = (acc / 58) as u8;
            rem = acc % 58;
        }
        out.push(ALPHABET[rem as usize]);
    }
    for &b in input {
        if b != 0 {
            break;
        }
        out.push(ALPHABET[0]);
    }
    out.reverse();
    // SAFETY: every byte pushed comes from `ALPHABET`, which is ASCII.
    unsafe { String::from_utf8_unchecked(out) }
}

/// Decodes a base58 string into its big-endian byte representation.
///
/// Returns `None` if any character is outside the alphabet. Otherwise the
/// digits are accumulated positionally (`acc = acc * 58 + digit`) into a
/// byte buffer, and one zero byte is prepended per leading `1` in the input.
///
/// The accumulator is a byte buffer, so the result is exact regardless of
/// input length; a fixed-width integer would overflow past 21 digits.
pub(crate) fn decode_base58(input: &str) -> Option<Vec<u8>> {
    // Big-endian accumulator; grows only when a multiply carries out, so it
    // never holds a leading zero byte.
    let mut num: Vec<u8> = Vec::new();
    for b in input.bytes() {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE {
            return None;
        }
        // num = num * 58 + val
        let mut carry = u32::from(val);
        for byte in num.iter_mut().rev() {
            let acc = u32::from(*byte) * 58 + carry;
            *byte = (acc & 0xFF) as u8;
            carry = acc >> 8;
        }
        while carry > 0 {
            num.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }
    let zeros = input.bytes().take_while(|&b| b == ALPHABET[0]).count();
    let mut bytes = vec![0_u8; zeros];
    bytes.extend_from_slice(&num);
    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_vectors() {
        assert_eq!(encode_base58(b""), "");
        assert_eq!(encode_base58(&[0]), "1");
        assert_eq!(encode_base58(&[0, 0]), "11");
        assert_eq!(encode_base58(&[57]), "z");
        assert_eq!(encode_base58(&[58]), "21");
        assert_eq!(encode_base58(b"Hello World"), "JxF12TrwUP45BMd");
    }

    #[test]
    fn decode_known_vectors() {
        assert_eq!(decode_base58(""), Some(vec![]));
        assert_eq!(decode_base58("1"), Some(vec![0]));
        assert_eq!(decode_base58("z"), Some(vec![57]));
        assert_eq!(decode_base58("21"), Some(vec![58]));
        assert_eq!(decode_base58("11z"), Some(vec![0, 0, 57]));
        assert_eq!(
            decode_base58("JxF12TrwUP45BMd").as_deref(),
            Some(b"Hello World".as_slice())
        );
    }

    #[test]
    fn encode_decode_preserves_payload_bytes() {
        for input in [
            vec![0x5F, 0x5E, 0x10, 0x00, 0x01, 0x02, 0x03],
            vec![0xFF; 7],
            vec![0, 0, 0, 0, 1, 2, 3],
            vec![0; 7],
            vec![1],
            vec![0x80, 0x00],
        ] {
            let encoded = encode_base58(&input);
            let decoded = decode_base58(&encoded).expect("alphabet output");
            assert_eq!(decoded, input, "roundtrip for {input:?} via {encoded}");
        }
    }

    #[test]
    fn decode_rejects_characters_outside_the_alphabet() {
        for input in ["0", "O", "I", "l", "!", "4ccVRcGv7k ", "abc-def"] {
            assert_eq!(decode_base58(input), None, "input {input:?}");
        }
    }

    #[test]
    fn decode_is_exact_past_fixed_width_range() {
        // 30 digits exceed what a u128 accumulator could hold; the byte
        // buffer must stay exact.
        let input = "z".repeat(30);
        let bytes = decode_base58(&input).expect("alphabet input");
        assert_eq!(encode_base58(&bytes), input);
    }

    #[test]
    fn leading_zero_bytes_survive_the_roundtrip() {
        let input = [0, 0, 0, 9, 9, 9];
        let encoded = encode_base58(&input);
        assert!(encoded.starts_with("111"));
        assert_eq!(decode_base58(&encoded), Some(input.to_vec()));
    }
}
