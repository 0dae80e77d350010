use embedded_hal_async::i2c::SevenBitAddress;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterMap {
    Status = 0x00,
    WhoAmI = 0x0D,
    XyzDataCfg = 0x0E,
    CtrlReg1 = 0x2A,
    MCtrlReg1 = 0x5B,
    MCtrlReg2 = 0x5C,
}

/// I2C address selected by the SA1/SA0 pins
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveAddress {
    #[default]
    Sa1LowSa0Low = 0x1E,
    Sa1LowSa0High = 0x1D,
    Sa1HighSa0Low = 0x1C,
    Sa1HighSa0High = 0x1F,
}

impl SlaveAddress {
    pub const fn addr(self) -> SevenBitAddress {
        self as SevenBitAddress
    }
}

/// Output data rate while in hybrid mode (half of the single-sensor rate)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    Hz400 = 0b000,
    Hz200 = 0b001,
    Hz100 = 0b010,
    Hz50 = 0b011,
    Hz25 = 0b100,
    Hz6_25 = 0b101,
    Hz3_125 = 0b110,
    Hz0_7813 = 0b111,
}

/// `m_os` ratio. The effective number of averaged samples depends on the data rate,
/// `Os7` is 8x at 200 Hz hybrid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagOversampling {
    Os0 = 0,
    Os1 = 1,
    Os2 = 2,
    Os3 = 3,
    Os4 = 4,
    Os5 = 5,
    Os6 = 6,
    Os7 = 7,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HybridMode {
    AccelOnly = 0b00,
    MagOnly = 0b01,
    Hybrid = 0b11,
}

/// How often the magnetic sensor reset pulse fires
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagResetCount {
    EveryCycle = 0b00,
    Every16Cycles = 0b01,
    Every512Cycles = 0b10,
    Disabled = 0b11,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScaleRange {
    G2 = 0b00,
    G4 = 0b01,
    G8 = 0b10,
}

impl AccelFullScaleRange {
    /// Sensitivity of one LSB of the 14-bit acceleration sample
    pub const fn micro_g_per_lsb(self) -> u32 {
        match self {
            Self::G2 => 244,
            Self::G4 => 488,
            Self::G8 => 976,
        }
    }
}

/// `CTRL_REG1`. Auto-wake sample rate bits are always written as zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlReg1 {
    pub data_rate: DataRate,
    pub low_noise: bool,
    pub fast_read: bool,
    pub active: bool,
}

impl CtrlReg1 {
    pub const STANDBY: Self = Self {
        data_rate: DataRate::Hz400,
        low_noise: false,
        fast_read: false,
        active: false,
    };

    pub const fn bits(self) -> u8 {
        (self.data_rate as u8) << 3
            | (self.low_noise as u8) << 2
            | (self.fast_read as u8) << 1
            | self.active as u8
    }
}

/// `M_CTRL_REG1`. One-shot reset and one-shot measurement are never requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagCtrlReg1 {
    pub auto_calibration: bool,
    pub oversampling: MagOversampling,
    pub mode: HybridMode,
}

impl MagCtrlReg1 {
    pub const fn bits(self) -> u8 {
        (self.auto_calibration as u8) << 7 | (self.oversampling as u8) << 2 | self.mode as u8
    }
}

/// `M_CTRL_REG2`. Min/max latching is left at its reset defaults.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagCtrlReg2 {
    /// Map magnetometer output registers right after the accelerometer ones
    pub hybrid_auto_increment: bool,
    pub reset_count: MagResetCount,
}

impl MagCtrlReg2 {
    pub const fn bits(self) -> u8 {
        (self.hybrid_auto_increment as u8) << 5 | self.reset_count as u8
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XyzDataCfg {
    pub high_pass_output: bool,
    pub range: AccelFullScaleRange,
}

impl XyzDataCfg {
    pub const fn bits(self) -> u8 {
        (self.high_pass_output as u8) << 4 | self.range as u8
    }
}

pub const MAG_CTRL_REG1: MagCtrlReg1 = MagCtrlReg1 {
    auto_calibration: false,
    oversampling: MagOversampling::Os7,
    mode: HybridMode::Hybrid,
};

pub const MAG_CTRL_REG2: MagCtrlReg2 = MagCtrlReg2 {
    hybrid_auto_increment: true,
    reset_count: MagResetCount::EveryCycle,
};

pub const XYZ_DATA_CFG: XyzDataCfg = XyzDataCfg {
    high_pass_output: false,
    range: AccelFullScaleRange::G4,
};

pub const CTRL_REG1_ACTIVE: CtrlReg1 = CtrlReg1 {
    data_rate: DataRate::Hz200,
    low_noise: true,
    fast_read: false,
    active: true,
};

/// Writes bringing the device from standby to continuous hybrid sampling.
///
/// Standby must come first and activation last: the mode registers only latch
/// while the part is inactive.
pub const CONFIGURATION_SEQUENCE: [(RegisterMap, u8); 5] = [
    (RegisterMap::CtrlReg1, CtrlReg1::STANDBY.bits()),
    (RegisterMap::MCtrlReg1, MAG_CTRL_REG1.bits()),
    (RegisterMap::MCtrlReg2, MAG_CTRL_REG2.bits()),
    (RegisterMap::XyzDataCfg, XYZ_DATA_CFG.bits()),
    (RegisterMap::CtrlReg1, CTRL_REG1_ACTIVE.bits()),
];
