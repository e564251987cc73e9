//! Battery and power supply status.

use std::time::Duration;

use opencnc_sdl3_sys as sys;
use serde::{Deserialize, Serialize};

use crate::error::{Sdl3Error, Sdl3Result, last_error};
use crate::macros::native_enum;
use crate::native::api;

native_enum! {
    pub enum PowerState: i32 {
        /// SDL could not determine the state; never returned by [`PowerInformation::query`].
        Error = sys::SDL_POWERSTATE_ERROR,
        Unknown = sys::SDL_POWERSTATE_UNKNOWN,
        /// Not plugged in, running on the battery.
        OnBattery = sys::SDL_POWERSTATE_ON_BATTERY,
        /// Plugged in, no battery available.
        NoBattery = sys::SDL_POWERSTATE_NO_BATTERY,
        Charging = sys::SDL_POWERSTATE_CHARGING,
        Charged = sys::SDL_POWERSTATE_CHARGED,
    }
}

/// Battery estimates; either may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingBattery {
    pub seconds: Option<Duration>,
    /// 0 to 100.
    pub percent: Option<u8>,
}

impl RemainingBattery {
    fn from_raw(seconds: i32, percent: i32) -> Self {
        Self {
            seconds: u64::try_from(seconds).ok().map(Duration::from_secs),
            percent: u8::try_from(percent.min(100)).ok(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerInformation {
    pub state: PowerState,
    pub battery: RemainingBattery,
}

impl PowerInformation {
    /// Reads the current power status.
    pub fn query() -> Sdl3Result<Self> {
        let api = api()?;
        let (mut seconds, mut percent) = (-1, -1);
        // SAFETY: both out-pointers reference live locals.
        let raw = unsafe { (api.SDL_GetPowerInfo)(&mut seconds, &mut percent) };
        match PowerState::from_raw(raw) {
            Some(PowerState::Error) => Err(Sdl3Error::Power(last_error(api))),
            Some(state) => Ok(Self {
                state,
                battery: RemainingBattery::from_raw(seconds, percent),
            }),
            None => Err(Sdl3Error::Power(format!("unknown power state {raw}"))),
        }
    }

    /// Refreshes in place. On failure the previous reading is kept.
    pub fn update(&mut self) -> Sdl3Result<()> {
        *self = Self::query()?;
        Ok(())
    }

    #[must_use]
    pub fn on_battery(&self) -> bool {
        self.state == PowerState::OnBattery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_estimates_are_unknown() {
        let battery = RemainingBattery::from_raw(-1, -1);
        assert_eq!(battery, RemainingBattery::default());
    }

    #[test]
    fn estimates_convert() {
        let battery = RemainingBattery::from_raw(5400, 73);
        assert_eq!(battery.seconds, Some(Duration::from_secs(5400)));
        assert_eq!(battery.percent, Some(73));
    }

    #[test]
    fn percent_is_capped() {
        assert_eq!(RemainingBattery::from_raw(0, 140).percent, Some(100));
        assert_eq!(RemainingBattery::from_raw(0, 400).percent, Some(100));
    }
}
