//! Blend modes.

use opencnc_sdl3_sys as sys;
use serde::{Deserialize, Serialize};

use crate::error::Sdl3Result;
use crate::macros::native_enum;
use crate::native::api;

/// How source and destination colors are combined during a blit.
///
/// Besides the predefined modes below, SDL accepts custom modes built with
/// [`BlendMode::compose_custom`], so this is a transparent wrapper rather than
/// a closed enum.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlendMode(pub u32);

impl BlendMode {
    /// `dstRGBA = srcRGBA`
    pub const NONE: Self = Self(sys::SDL_BLENDMODE_NONE);
    /// Alpha blending.
    pub const BLEND: Self = Self(sys::SDL_BLENDMODE_BLEND);
    /// Alpha blending with premultiplied source.
    pub const BLEND_PREMULTIPLIED: Self = Self(sys::SDL_BLENDMODE_BLEND_PREMULTIPLIED);
    /// Additive blending.
    pub const ADD: Self = Self(sys::SDL_BLENDMODE_ADD);
    /// Additive blending with premultiplied source.
    pub const ADD_PREMULTIPLIED: Self = Self(sys::SDL_BLENDMODE_ADD_PREMULTIPLIED);
    /// Color modulate.
    pub const MOD: Self = Self(sys::SDL_BLENDMODE_MOD);
    /// Color multiply.
    pub const MUL: Self = Self(sys::SDL_BLENDMODE_MUL);
    pub const INVALID: Self = Self(sys::SDL_BLENDMODE_INVALID);

    /// Builds a custom mode from per-channel factors and operations.
    ///
    /// Whether a renderer supports the combination is only known when the
    /// mode is used.
    pub fn compose_custom(
        src_color_factor: BlendFactor,
        dst_color_factor: BlendFactor,
        color_operation: BlendOperation,
        src_alpha_factor: BlendFactor,
        dst_alpha_factor: BlendFactor,
        alpha_operation: BlendOperation,
    ) -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: plain value arguments.
        let mode = unsafe {
            (api.SDL_ComposeCustomBlendMode)(
                src_color_factor.raw(),
                dst_color_factor.raw(),
                color_operation.raw(),
                src_alpha_factor.raw(),
                dst_alpha_factor.raw(),
                alpha_operation.raw(),
            )
        };
        Ok(Self(mode))
    }

    #[must_use]
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }
}

impl Default for BlendMode {
    fn default() -> Self {
        Self::NONE
    }
}

native_enum! {
    /// Operation combining the weighted source and destination.
    pub enum BlendOperation: i32 {
        Add = sys::SDL_BLENDOPERATION_ADD,
        Subtract = sys::SDL_BLENDOPERATION_SUBTRACT,
        RevSubtract = sys::SDL_BLENDOPERATION_REV_SUBTRACT,
        Minimum = sys::SDL_BLENDOPERATION_MINIMUM,
        Maximum = sys::SDL_BLENDOPERATION_MAXIMUM,
    }
}

native_enum! {
    /// Weight applied to a source or destination channel.
    pub enum BlendFactor: i32 {
        Zero = sys::SDL_BLENDFACTOR_ZERO,
        One = sys::SDL_BLENDFACTOR_ONE,
        SrcColor = sys::SDL_BLENDFACTOR_SRC_COLOR,
        OneMinusSrcColor = sys::SDL_BLENDFACTOR_ONE_MINUS_SRC_COLOR,
        SrcAlpha = sys::SDL_BLENDFACTOR_SRC_ALPHA,
        OneMinusSrcAlpha = sys::SDL_BLENDFACTOR_ONE_MINUS_SRC_ALPHA,
        DstColor = sys::SDL_BLENDFACTOR_DST_COLOR,
        OneMinusDstColor = sys::SDL_BLENDFACTOR_ONE_MINUS_DST_COLOR,
        DstAlpha = sys::SDL_BLENDFACTOR_DST_ALPHA,
        OneMinusDstAlpha = sys::SDL_BLENDFACTOR_ONE_MINUS_DST_ALPHA,
    }
}
