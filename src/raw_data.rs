#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawData {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl RawData {
    pub const SIZE: usize = 6;

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Left-justified 14-bit accelerometer output, sign kept by the arithmetic shift
    fn from_accel_bytes(value: &[u8]) -> Self {
        Self {
            x: i16::from_be_bytes([value[0], value[1]]) >> 2,
            y: i16::from_be_bytes([value[2], value[3]]) >> 2,
            z: i16::from_be_bytes([value[4], value[5]]) >> 2,
        }
    }
}

impl From<[u8; Self::SIZE]> for RawData {
    fn from(value: [u8; Self::SIZE]) -> Self {
        Self {
            x: i16::from_be_bytes([value[0], value[1]]),
            y: i16::from_be_bytes([value[2], value[3]]),
            z: i16::from_be_bytes([value[4], value[5]]),
        }
    }
}

/// One hybrid acquisition: status byte, accelerometer then magnetometer outputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSampleBlock {
    bytes: [u8; Self::SIZE],
}

impl RawSampleBlock {
    pub const SIZE: usize = 1 + 2 * RawData::SIZE;

    const ACCEL_OFFSET: usize = 1;
    const MAG_OFFSET: usize = Self::ACCEL_OFFSET + RawData::SIZE;

    pub fn status(&self) -> u8 {
        self.bytes[0]
    }

    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.bytes
    }

    /// Split the block into `(accel, mag)`
    pub fn decode(&self) -> (RawData, RawData) {
        let accel =
            RawData::from_accel_bytes(&self.bytes[Self::ACCEL_OFFSET..Self::MAG_OFFSET]);

        let mut mag = [0; RawData::SIZE];
        mag.copy_from_slice(&self.bytes[Self::MAG_OFFSET..]);

        (accel, mag.into())
    }
}

impl From<[u8; Self::SIZE]> for RawSampleBlock {
    fn from(bytes: [u8; Self::SIZE]) -> Self {
        Self { bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(status: u8, accel: RawData, mag: RawData) -> RawSampleBlock {
        let mut bytes = [0; RawSampleBlock::SIZE];
        bytes[0] = status;

        for (i, v) in [accel.x, accel.y, accel.z].into_iter().enumerate() {
            bytes[1 + 2 * i..3 + 2 * i].copy_from_slice(&(v << 2).to_be_bytes());
        }

        for (i, v) in [mag.x, mag.y, mag.z].into_iter().enumerate() {
            bytes[7 + 2 * i..9 + 2 * i].copy_from_slice(&v.to_be_bytes());
        }

        bytes.into()
    }

    #[test]
    fn decode_known_block() {
        let block: RawSampleBlock = [
            0x00, 0x04, 0x00, 0x08, 0x00, 0x0C, 0x00, 0x00, 0x10, 0x00, 0x20, 0x00, 0x30,
        ]
        .into();

        let (accel, mag) = block.decode();

        // 0x0400 >> 2 = 0x0100
        assert_eq!(accel, RawData::new(256, 512, 768));
        assert_eq!(mag, RawData::new(16, 32, 48));
    }

    #[test]
    fn decode_negative_values() {
        let block: RawSampleBlock = [
            0xFF, 0xFF, 0xFC, 0x80, 0x00, 0x7F, 0xFC, 0xFF, 0xFF, 0x80, 0x00, 0x7F, 0xFF,
        ]
        .into();

        let (accel, mag) = block.decode();

        assert_eq!(block.status(), 0xFF);
        assert_eq!(accel, RawData::new(-1, -8192, 8191));
        assert_eq!(mag, RawData::new(-1, i16::MIN, i16::MAX));
    }

    #[test]
    fn accel_low_bits_are_discarded() {
        let block: RawSampleBlock = [
            0x00, 0x00, 0x07, 0xFF, 0xFF, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]
        .into();

        let (accel, _) = block.decode();

        assert_eq!(accel, RawData::new(1, -1, 0));
    }

    #[test]
    fn status_byte_is_ignored() {
        let mut bytes = [0x12; RawSampleBlock::SIZE];

        let (accel_a, mag_a) = RawSampleBlock::from(bytes).decode();
        bytes[0] = 0xA5;
        let (accel_b, mag_b) = RawSampleBlock::from(bytes).decode();

        assert_eq!(accel_a, accel_b);
        assert_eq!(mag_a, mag_b);
    }

    #[test]
    fn encoder_lays_out_block() {
        let block = encode(0x0F, RawData::new(256, -1, 8191), RawData::new(16, -100, i16::MIN));

        assert_eq!(
            block.as_bytes(),
            &[0x0F, 0x04, 0x00, 0xFF, 0xFC, 0x7F, 0xFC, 0x00, 0x10, 0xFF, 0x9C, 0x80, 0x00]
        );
    }

    #[test]
    fn round_trip_recovers_every_accel_value() {
        for a in -(1 << 13)..(1 << 13) {
            for slot in 0..3 {
                let mut axes = [0; 3];
                axes[slot] = a;
                let accel = RawData::new(axes[0], axes[1], axes[2]);

                let (decoded, _) = encode(0, accel, RawData::default()).decode();

                assert_eq!(decoded, accel);
            }
        }
    }

    #[test]
    fn round_trip_recovers_every_mag_value() {
        for m in i16::MIN..=i16::MAX {
            for slot in 0..3 {
                let mut axes = [0; 3];
                axes[slot] = m;
                let mag = RawData::new(axes[0], axes[1], axes[2]);

                let (accel, decoded) = encode(0, RawData::default(), mag).decode();

                assert_eq!(decoded, mag);
                assert_eq!(accel, RawData::default());
            }
        }
    }
}
