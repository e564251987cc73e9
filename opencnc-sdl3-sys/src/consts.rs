//! Scalar constants and property names from the SDL 3.2 headers.

use std::ffi::{CStr, c_int};

use crate::types::*;

// ── SDL_init.h ──────────────────────────────────────────────────

pub const SDL_INIT_AUDIO: SDL_InitFlags = 0x0000_0010;
pub const SDL_INIT_VIDEO: SDL_InitFlags = 0x0000_0020;
pub const SDL_INIT_JOYSTICK: SDL_InitFlags = 0x0000_0200;
pub const SDL_INIT_HAPTIC: SDL_InitFlags = 0x0000_1000;
pub const SDL_INIT_GAMEPAD: SDL_InitFlags = 0x0000_2000;
pub const SDL_INIT_EVENTS: SDL_InitFlags = 0x0000_4000;
pub const SDL_INIT_SENSOR: SDL_InitFlags = 0x0000_8000;
pub const SDL_INIT_CAMERA: SDL_InitFlags = 0x0001_0000;

pub const SDL_PROP_APP_METADATA_NAME_STRING: &CStr = c"SDL.app.metadata.name";
pub const SDL_PROP_APP_METADATA_VERSION_STRING: &CStr = c"SDL.app.metadata.version";
pub const SDL_PROP_APP_METADATA_IDENTIFIER_STRING: &CStr = c"SDL.app.metadata.identifier";
pub const SDL_PROP_APP_METADATA_CREATOR_STRING: &CStr = c"SDL.app.metadata.creator";
pub const SDL_PROP_APP_METADATA_COPYRIGHT_STRING: &CStr = c"SDL.app.metadata.copyright";
pub const SDL_PROP_APP_METADATA_URL_STRING: &CStr = c"SDL.app.metadata.url";
pub const SDL_PROP_APP_METADATA_TYPE_STRING: &CStr = c"SDL.app.metadata.type";

// ── SDL_blendmode.h ─────────────────────────────────────────────

pub const SDL_BLENDMODE_NONE: SDL_BlendMode = 0x0000_0000;
pub const SDL_BLENDMODE_BLEND: SDL_BlendMode = 0x0000_0001;
pub const SDL_BLENDMODE_BLEND_PREMULTIPLIED: SDL_BlendMode = 0x0000_0010;
pub const SDL_BLENDMODE_ADD: SDL_BlendMode = 0x0000_0002;
pub const SDL_BLENDMODE_ADD_PREMULTIPLIED: SDL_BlendMode = 0x0000_0020;
pub const SDL_BLENDMODE_MOD: SDL_BlendMode = 0x0000_0004;
pub const SDL_BLENDMODE_MUL: SDL_BlendMode = 0x0000_0008;
pub const SDL_BLENDMODE_INVALID: SDL_BlendMode = 0x7fff_ffff;

pub const SDL_BLENDOPERATION_ADD: SDL_BlendOperation = 0x1;
pub const SDL_BLENDOPERATION_SUBTRACT: SDL_BlendOperation = 0x2;
pub const SDL_BLENDOPERATION_REV_SUBTRACT: SDL_BlendOperation = 0x3;
pub const SDL_BLENDOPERATION_MINIMUM: SDL_BlendOperation = 0x4;
pub const SDL_BLENDOPERATION_MAXIMUM: SDL_BlendOperation = 0x5;

pub const SDL_BLENDFACTOR_ZERO: SDL_BlendFactor = 0x1;
pub const SDL_BLENDFACTOR_ONE: SDL_BlendFactor = 0x2;
pub const SDL_BLENDFACTOR_SRC_COLOR: SDL_BlendFactor = 0x3;
pub const SDL_BLENDFACTOR_ONE_MINUS_SRC_COLOR: SDL_BlendFactor = 0x4;
pub const SDL_BLENDFACTOR_SRC_ALPHA: SDL_BlendFactor = 0x5;
pub const SDL_BLENDFACTOR_ONE_MINUS_SRC_ALPHA: SDL_BlendFactor = 0x6;
pub const SDL_BLENDFACTOR_DST_COLOR: SDL_BlendFactor = 0x7;
pub const SDL_BLENDFACTOR_ONE_MINUS_DST_COLOR: SDL_BlendFactor = 0x8;
pub const SDL_BLENDFACTOR_DST_ALPHA: SDL_BlendFactor = 0x9;
pub const SDL_BLENDFACTOR_ONE_MINUS_DST_ALPHA: SDL_BlendFactor = 0xa;

// ── SDL_properties.h ────────────────────────────────────────────

pub const SDL_PROPERTY_TYPE_INVALID: SDL_PropertyType = 0;
pub const SDL_PROPERTY_TYPE_POINTER: SDL_PropertyType = 1;
pub const SDL_PROPERTY_TYPE_STRING: SDL_PropertyType = 2;
pub const SDL_PROPERTY_TYPE_NUMBER: SDL_PropertyType = 3;
pub const SDL_PROPERTY_TYPE_FLOAT: SDL_PropertyType = 4;
pub const SDL_PROPERTY_TYPE_BOOLEAN: SDL_PropertyType = 5;

// ── SDL_surface.h ───────────────────────────────────────────────

pub const SDL_SURFACE_PREALLOCATED: SDL_SurfaceFlags = 0x0000_0001;
pub const SDL_SURFACE_LOCK_NEEDED: SDL_SurfaceFlags = 0x0000_0002;
pub const SDL_SURFACE_LOCKED: SDL_SurfaceFlags = 0x0000_0004;
pub const SDL_SURFACE_SIMD_ALIGNED: SDL_SurfaceFlags = 0x0000_0008;

pub const SDL_SCALEMODE_NEAREST: SDL_ScaleMode = 0;
pub const SDL_SCALEMODE_LINEAR: SDL_ScaleMode = 1;

pub const SDL_FLIP_NONE: SDL_FlipMode = 0;
pub const SDL_FLIP_HORIZONTAL: SDL_FlipMode = 1;
pub const SDL_FLIP_VERTICAL: SDL_FlipMode = 2;

pub const SDL_PROP_SURFACE_SDR_WHITE_POINT_FLOAT: &CStr = c"SDL.surface.SDR_white_point";
pub const SDL_PROP_SURFACE_HDR_HEADROOM_FLOAT: &CStr = c"SDL.surface.HDR_headroom";
pub const SDL_PROP_SURFACE_TONEMAP_OPERATOR_STRING: &CStr = c"SDL.surface.tonemap";
pub const SDL_PROP_SURFACE_HOTSPOT_X_NUMBER: &CStr = c"SDL.surface.hotspot.x";
pub const SDL_PROP_SURFACE_HOTSPOT_Y_NUMBER: &CStr = c"SDL.surface.hotspot.y";

// ── SDL_log.h ───────────────────────────────────────────────────

pub const SDL_LOG_CATEGORY_APPLICATION: c_int = 0;
pub const SDL_LOG_CATEGORY_ERROR: c_int = 1;
pub const SDL_LOG_CATEGORY_ASSERT: c_int = 2;
pub const SDL_LOG_CATEGORY_SYSTEM: c_int = 3;
pub const SDL_LOG_CATEGORY_AUDIO: c_int = 4;
pub const SDL_LOG_CATEGORY_VIDEO: c_int = 5;
pub const SDL_LOG_CATEGORY_RENDER: c_int = 6;
pub const SDL_LOG_CATEGORY_INPUT: c_int = 7;
pub const SDL_LOG_CATEGORY_TEST: c_int = 8;
pub const SDL_LOG_CATEGORY_GPU: c_int = 9;
pub const SDL_LOG_CATEGORY_CUSTOM: c_int = 19;

pub const SDL_LOG_PRIORITY_INVALID: SDL_LogPriority = 0;
pub const SDL_LOG_PRIORITY_TRACE: SDL_LogPriority = 1;
pub const SDL_LOG_PRIORITY_VERBOSE: SDL_LogPriority = 2;
pub const SDL_LOG_PRIORITY_DEBUG: SDL_LogPriority = 3;
pub const SDL_LOG_PRIORITY_INFO: SDL_LogPriority = 4;
pub const SDL_LOG_PRIORITY_WARN: SDL_LogPriority = 5;
pub const SDL_LOG_PRIORITY_ERROR: SDL_LogPriority = 6;
pub const SDL_LOG_PRIORITY_CRITICAL: SDL_LogPriority = 7;
pub const SDL_LOG_PRIORITY_COUNT: SDL_LogPriority = 8;

// ── SDL_power.h ─────────────────────────────────────────────────

pub const SDL_POWERSTATE_ERROR: SDL_PowerState = -1;
pub const SDL_POWERSTATE_UNKNOWN: SDL_PowerState = 0;
pub const SDL_POWERSTATE_ON_BATTERY: SDL_PowerState = 1;
pub const SDL_POWERSTATE_NO_BATTERY: SDL_PowerState = 2;
pub const SDL_POWERSTATE_CHARGING: SDL_PowerState = 3;
pub const SDL_POWERSTATE_CHARGED: SDL_PowerState = 4;

// ── SDL_iostream.h ──────────────────────────────────────────────

pub const SDL_IO_STATUS_READY: SDL_IOStatus = 0;
pub const SDL_IO_STATUS_ERROR: SDL_IOStatus = 1;
pub const SDL_IO_STATUS_EOF: SDL_IOStatus = 2;
pub const SDL_IO_STATUS_NOT_READY: SDL_IOStatus = 3;
pub const SDL_IO_STATUS_READONLY: SDL_IOStatus = 4;
pub const SDL_IO_STATUS_WRITEONLY: SDL_IOStatus = 5;

pub const SDL_IO_SEEK_SET: SDL_IOWhence = 0;
pub const SDL_IO_SEEK_CUR: SDL_IOWhence = 1;
pub const SDL_IO_SEEK_END: SDL_IOWhence = 2;

pub const SDL_PROP_IOSTREAM_WINDOWS_HANDLE_POINTER: &CStr = c"SDL.iostream.windows.handle";
pub const SDL_PROP_IOSTREAM_STDIO_FILE_POINTER: &CStr = c"SDL.iostream.stdio.file";
pub const SDL_PROP_IOSTREAM_FILE_DESCRIPTOR_NUMBER: &CStr = c"SDL.iostream.file_descriptor";
pub const SDL_PROP_IOSTREAM_ANDROID_AASSET_POINTER: &CStr = c"SDL.iostream.android.aasset";
pub const SDL_PROP_IOSTREAM_MEMORY_POINTER: &CStr = c"SDL.iostream.memory.base";
pub const SDL_PROP_IOSTREAM_MEMORY_SIZE_NUMBER: &CStr = c"SDL.iostream.memory.size";
pub const SDL_PROP_IOSTREAM_DYNAMIC_MEMORY_POINTER: &CStr = c"SDL.iostream.dynamic.memory";
pub const SDL_PROP_IOSTREAM_DYNAMIC_CHUNKSIZE_NUMBER: &CStr = c"SDL.iostream.dynamic.chunksize";
