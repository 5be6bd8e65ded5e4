/// Resizes a little endian integer to another byte width.
///
/// Unsigned inputs are zero-extended, signed inputs are sign-extended
/// (see <https://en.wikipedia.org/wiki/Sign_extension>). When shrinking,
/// `None` is returned if the value does not fit into the output width.
pub const fn resize_le_int<const INPUT_SIZE: usize, const OUTPUT_SIZE: usize>(
    input: [u8; INPUT_SIZE],
    signed: bool,
) -> Option<[u8; OUTPUT_SIZE]> {
    let negative = signed && INPUT_SIZE > 0 && input[INPUT_SIZE - 1] & 0b10000000 != 0;
    let fill = if negative { 0b11111111u8 } else { 0u8 };

    let mut output = [fill; OUTPUT_SIZE];
    let mut i = 0;
    // copy_from_slice is not const, so we have to do this manually
    while i < INPUT_SIZE {
        if i < OUTPUT_SIZE {
            output[i] = input[i];
        } else if input[i] != fill {
            // a dropped byte carries information
            return None;
        }
        i += 1;
    }

    // when shrinking a signed number the new top bit has to agree with the sign
    if signed && OUTPUT_SIZE < INPUT_SIZE && OUTPUT_SIZE > 0 {
        let top_negative = output[OUTPUT_SIZE - 1] & 0b10000000 != 0;
        if top_negative != negative {
            return None;
        }
    }
    Some(output)
}

/// Reverses the byte order of an array, converting between little and big endian.
pub const fn reverse_bytes<const SIZE: usize>(input: [u8; SIZE]) -> [u8; SIZE] {
    let mut output = [0u8; SIZE];
    let mut i = 0;
    while i < SIZE {
        output[i] = input[SIZE - 1 - i];
        i += 1;
    }
    output
}
