use crate::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

pub type UnsignedInteger<const BITS: u8> = SerdeInteger<false, false, BITS>;
pub type UnsignedVariableInteger<const BITS: u8> = SerdeInteger<false, true, BITS>;
pub type SignedVariableInteger<const BITS: u8> = SerdeInteger<true, true, BITS>;

/// An integer written with an explicit bit budget.
///
/// Fixed integers always use `BITS` bits. Variable integers write `BITS`-bit
/// chunks, each preceded by a continuation bit, so small values stay small on
/// the wire. Signed integers add a leading sign bit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SerdeInteger<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> {
    value: i128,
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> SerdeInteger<SIGNED, VARIABLE, BITS> {
    /// Panics if the value cannot be represented with this encoding
    pub fn new<T: Into<i128>>(value: T) -> Self {
        match Self::try_new(value) {
            Ok(integer) => integer,
            Err(_) => panic!("value out of range for a {BITS}-bit serde integer"),
        }
    }

    pub fn try_new<T: Into<i128>>(value: T) -> Result<Self, SerdeErr> {
        let value = value.into();
        if BITS == 0 || BITS > 64 {
            return Err(SerdeErr);
        }
        if !SIGNED && value < 0 {
            return Err(SerdeErr);
        }
        if !VARIABLE && value.unsigned_abs() >= 1u128 << BITS {
            return Err(SerdeErr);
        }
        Ok(Self { value })
    }

    pub fn get(&self) -> i128 {
        self.value
    }

    pub fn to<T: TryFrom<i128>>(&self) -> Result<T, SerdeErr> {
        T::try_from(self.value).map_err(|_| SerdeErr)
    }

    fn write_chunk(writer: &mut dyn BitWrite, mut value: u128) -> u128 {
        for _ in 0..BITS {
            writer.write_bit(value & 1 != 0);
            value >>= 1;
        }
        value
    }
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> Serde
    for SerdeInteger<SIGNED, VARIABLE, BITS>
{
    fn ser(&self, writer: &mut dyn BitWrite) {
        if SIGNED {
            writer.write_bit(self.value < 0);
        }
        let mut value = self.value.unsigned_abs();

        if VARIABLE {
            loop {
                let proceed = value >= 1u128 << BITS;
                writer.write_bit(proceed);
                value = Self::write_chunk(writer, value);
                if !proceed {
                    return;
                }
            }
        } else {
            Self::write_chunk(writer, value);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let negative = SIGNED && reader.read_bit()?;

        let mut output: u128 = 0;
        let mut shift: u32 = 0;
        loop {
            let proceed = VARIABLE && reader.read_bit()?;
            for _ in 0..BITS {
                if shift >= 127 {
                    // more chunks than any i128 can hold
                    return Err(SerdeErr);
                }
                if reader.read_bit()? {
                    output |= 1u128 << shift;
                }
                shift += 1;
            }
            if !proceed {
                break;
            }
        }

        let value = output as i128;
        Ok(Self {
            value: if negative { -value } else { value },
        })
    }
}

impl<const SIGNED: bool, const BITS: u8> ConstBitLength for SerdeInteger<SIGNED, false, BITS> {
    fn const_bit_length() -> u32 {
        let sign = if SIGNED { 1 } else { 0 };
        sign + BITS as u32
    }
}
