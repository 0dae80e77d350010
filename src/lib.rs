#![no_std]

pub mod error;
pub mod raw_data;
pub mod register_map;
pub mod transport;

use embedded_hal_async::i2c::{I2c, SevenBitAddress};
use error::Error;
use raw_data::{RawData, RawSampleBlock};
use register_map::{RegisterMap, SlaveAddress, CONFIGURATION_SEQUENCE};
use transport::{I2cTransport, RegisterTransport};

const WHO_AM_I: u8 = 0xC7;

/// Progress of the bring-up sequence
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    Uninitialized,
    Identified,
    Configured,
    Sampling,
}

pub struct Fxos8700<T> {
    dev: T,
    address: SevenBitAddress,
    state: DriverState,
}

impl<T> Fxos8700<I2cTransport<T>>
where
    T: I2c,
{
    /// Use driver directly on an I2C bus with default address (SA1 and SA0 low)
    pub fn from_i2c(dev: T) -> Self {
        Self::new(I2cTransport::new(dev))
    }
}

impl<T> Fxos8700<T>
where
    T: RegisterTransport,
{
    /// Use driver with default address (SA1 and SA0 low)
    pub fn new(dev: T) -> Self {
        Self {
            dev,
            address: SlaveAddress::default().addr(),
            state: DriverState::Uninitialized,
        }
    }

    /// Adjust device address to the SA1/SA0 strapping
    pub fn with_slave_address(self, address: SlaveAddress) -> Self {
        Self {
            address: address.addr(),
            ..self
        }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn transport(&mut self) -> &mut T {
        &mut self.dev
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.dev
    }

    /// Identify and configure the device, leaving it sampling
    pub async fn initialize(&mut self) -> Result<(), Error<T::Error>> {
        self.identify().await?;
        self.configure().await
    }

    /// Check `WHO_AM_I` response
    pub async fn identify(&mut self) -> Result<(), Error<T::Error>> {
        let value = match self.read_register(RegisterMap::WhoAmI).await {
            Ok(value) => value,
            Err(e) => {
                self.state = DriverState::Uninitialized;

                return Err(e);
            }
        };

        if value != WHO_AM_I {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected WHO_AM_I: {=u8:#x}", value);

            self.state = DriverState::Uninitialized;

            return Err(Error::UnexpectedIdentity(value));
        }

        self.state = self.state.max(DriverState::Identified);

        #[cfg(feature = "defmt")]
        defmt::trace!("FXOS8700CQ detected at {=u8:#x}", self.address);

        Ok(())
    }

    /// Put the part in standby, set up hybrid mode and start sampling.
    ///
    /// Stops at the first failed write without undoing earlier ones; the whole
    /// sequence is safe to run again from the start.
    pub async fn configure(&mut self) -> Result<(), Error<T::Error>> {
        if self.state == DriverState::Uninitialized {
            return Err(Error::NotIdentified);
        }

        self.state = DriverState::Identified;

        let [standby, mag_ctrl1, mag_ctrl2, data_cfg, activate] = CONFIGURATION_SEQUENCE;

        for (register, value) in [standby, mag_ctrl1, mag_ctrl2, data_cfg] {
            self.write_configuration(register, value).await?;
        }

        self.state = DriverState::Configured;

        let (register, value) = activate;
        self.write_configuration(register, value).await?;

        self.state = DriverState::Sampling;

        #[cfg(feature = "defmt")]
        defmt::trace!("FXOS8700CQ configured");

        Ok(())
    }

    /// Read status, accelerometer and magnetometer outputs in one burst.
    /// Returns `(accel, mag)`.
    pub async fn read_samples(&mut self) -> Result<(RawData, RawData), Error<T::Error>> {
        if self.state != DriverState::Sampling {
            return Err(Error::NotConfigured);
        }

        let mut data = [0; RawSampleBlock::SIZE];

        self.read_registers(RegisterMap::Status, &mut data).await?;

        Ok(RawSampleBlock::from(data).decode())
    }

    pub async fn read_register(&mut self, register: RegisterMap) -> Result<u8, Error<T::Error>> {
        let mut buf = [0; 1];

        self.read_registers(register, &mut buf).await?;

        Ok(buf[0])
    }

    /// Write a single register outside the configuration sequence.
    ///
    /// A write may change the operating mode, so the driver falls back to `Identified`
    /// and `configure` has to run again before sampling.
    pub async fn write_register(
        &mut self,
        register: RegisterMap,
        value: u8,
    ) -> Result<(), Error<T::Error>> {
        self.state = self.state.min(DriverState::Identified);

        self.write_configuration(register, value).await
    }

    async fn write_configuration(
        &mut self,
        register: RegisterMap,
        value: u8,
    ) -> Result<(), Error<T::Error>> {
        let written = self
            .dev
            .write_registers(self.address, register as u8, &[value])
            .await
            .map_err(Error::Transport)?;

        if written != 1 {
            #[cfg(feature = "defmt")]
            defmt::warn!("Short write to {}: {=usize} bytes", register, written);

            return Err(Error::ShortWrite {
                register,
                expected: 1,
                actual: written,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{} <- {=u8:#04x}", register, value);

        Ok(())
    }

    async fn read_registers(
        &mut self,
        register: RegisterMap,
        buf: &mut [u8],
    ) -> Result<(), Error<T::Error>> {
        let read = self
            .dev
            .read_registers(self.address, register as u8, buf)
            .await
            .map_err(Error::Transport)?;

        if read != buf.len() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Short read from {}: {=usize}/{=usize} bytes",
                register,
                read,
                buf.len()
            );

            return Err(Error::ShortRead {
                expected: buf.len(),
                actual: read,
            });
        }

        Ok(())
    }
}
