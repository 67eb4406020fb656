use crate::SerdeErr;

pub struct BitReader<'b> {
    buffer: &'b [u8],
    scratch: u8,
    scratch_index: u8,
    buffer_index: usize,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            scratch: 0,
            scratch_index: 8,
            buffer_index: 0,
        }
    }

    pub fn bits_remaining(&self) -> usize {
        (self.buffer.len() - self.buffer_index) * 8 + (8 - self.scratch_index as usize)
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        if self.scratch_index >= 8 {
            let Some(byte) = self.buffer.get(self.buffer_index) else {
                return Err(SerdeErr);
            };
            self.scratch = *byte;
            self.scratch_index = 0;
            self.buffer_index += 1;
        }

        let bit = (self.scratch >> self.scratch_index) & 1 != 0;
        self.scratch_index += 1;
        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let mut output = 0u8;
        for index in 0..8 {
            if self.read_bit()? {
                output |= 1 << index;
            }
        }
        Ok(output)
    }
}
