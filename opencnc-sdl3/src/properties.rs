//! Property stores.
//!
//! A property store is a native, thread-safe map from names to values of one
//! of five kinds. Stores are identified by a plain integer, so [`PropertiesId`]
//! is `Copy` and never frees anything; [`Properties`] is the owning wrapper
//! that destroys its store on drop.

use std::any::Any;
use std::ffi::{CStr, c_char, c_void};
use std::marker::PhantomData;
use std::ops::Deref;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use opencnc_sdl3_sys::{self as sys, Sdl3Api};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Sdl3Error, Sdl3Result, check, last_error};
use crate::macros::native_enum;
use crate::native::{api, borrowed_string, cstring};

native_enum! {
    /// Kind of value stored under a property name.
    pub enum PropertyType: i32 {
        Invalid = sys::SDL_PROPERTY_TYPE_INVALID,
        Pointer = sys::SDL_PROPERTY_TYPE_POINTER,
        String = sys::SDL_PROPERTY_TYPE_STRING,
        Number = sys::SDL_PROPERTY_TYPE_NUMBER,
        Float = sys::SDL_PROPERTY_TYPE_FLOAT,
        Boolean = sys::SDL_PROPERTY_TYPE_BOOLEAN,
    }
}

/// A property value of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Pointer(*mut c_void),
    String(String),
    Number(i64),
    Float(f32),
    Boolean(bool),
}

impl PropertyValue {
    #[must_use]
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::Pointer(_) => PropertyType::Pointer,
            Self::String(_) => PropertyType::String,
            Self::Number(_) => PropertyType::Number,
            Self::Float(_) => PropertyType::Float,
            Self::Boolean(_) => PropertyType::Boolean,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

type Cleanup = Box<dyn FnOnce(*mut c_void) + Send>;

unsafe extern "C" fn cleanup_trampoline(userdata: *mut c_void, value: *mut c_void) {
    // SAFETY: `userdata` is the boxed closure leaked by
    // `set_pointer_with_cleanup`; SDL invokes the cleanup exactly once.
    let cleanup = unsafe { Box::from_raw(userdata.cast::<Cleanup>()) };
    // Unwinding into C would abort the process.
    if catch_unwind(AssertUnwindSafe(|| cleanup(value))).is_err() {
        warn!("Property cleanup panicked");
    }
}

struct Enumeration<F> {
    callback: F,
    panic: Option<Box<dyn Any + Send>>,
}

unsafe extern "C" fn enumerate_trampoline<F>(
    userdata: *mut c_void,
    props: sys::SDL_PropertiesID,
    name: *const c_char,
) where
    F: FnMut(PropertiesId, &str),
{
    if userdata.is_null() || name.is_null() {
        return;
    }
    // SAFETY: `userdata` is the `&mut Enumeration<F>` passed to
    // SDL_EnumerateProperties, which only calls back before it returns.
    let state = unsafe { &mut *userdata.cast::<Enumeration<F>>() };
    if state.panic.is_some() {
        return;
    }
    // SAFETY: SDL passes the NUL-terminated key it stores.
    let name = unsafe { CStr::from_ptr(name) }.to_string_lossy();
    let callback = &mut state.callback;
    if let Err(payload) = catch_unwind(AssertUnwindSafe(|| callback(PropertiesId(props), &name))) {
        state.panic = Some(payload);
    }
}

/// Identifier of a native property store.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertiesId(pub u32);

impl PropertiesId {
    pub const INVALID: Self = Self(0);

    /// The process-wide store.
    pub fn global() -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: no arguments.
        let id = unsafe { (api.SDL_GetGlobalProperties)() };
        Self::checked(api, id)
    }

    /// Creates an empty store. The caller must [`destroy`](Self::destroy) it;
    /// prefer [`Properties::new`] for automatic cleanup.
    pub fn create() -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: no arguments.
        let id = unsafe { (api.SDL_CreateProperties)() };
        Self::checked(api, id)
    }

    fn checked(api: &Sdl3Api, id: sys::SDL_PropertiesID) -> Sdl3Result<Self> {
        if id == 0 {
            Err(Sdl3Error::Properties(last_error(api)))
        } else {
            Ok(Self(id))
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Copies every property into `dst`, overwriting same-named entries.
    /// Pointers with cleanup callbacks are not copied.
    pub fn copy_to(self, dst: PropertiesId) -> Sdl3Result<()> {
        let api = api()?;
        // SAFETY: plain ids.
        let ok = unsafe { (api.SDL_CopyProperties)(self.0, dst.0) };
        check(api, ok, Sdl3Error::Properties)
    }

    /// Locks the store against other threads until the guard is dropped.
    pub fn lock(self) -> Sdl3Result<PropertiesLock> {
        let api = api()?;
        // SAFETY: plain id.
        let ok = unsafe { (api.SDL_LockProperties)(self.0) };
        check(api, ok, Sdl3Error::Properties)?;
        Ok(PropertiesLock {
            id: self,
            api,
            _not_send: PhantomData,
        })
    }

    /// Stores a raw pointer. SDL never dereferences it.
    pub fn set_pointer(self, name: &str, value: *mut c_void) -> Sdl3Result<()> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` is NUL-terminated and outlives the call.
        let ok = unsafe { (api.SDL_SetPointerProperty)(self.0, name.as_ptr(), value) };
        check(api, ok, Sdl3Error::Properties)
    }

    /// Stores a pointer together with a cleanup closure.
    ///
    /// SDL runs `cleanup` once, when the value is replaced or cleared, or the
    /// store is destroyed. If setting fails the closure runs before this
    /// returns.
    pub fn set_pointer_with_cleanup<F>(self, name: &str, value: *mut c_void, cleanup: F) -> Sdl3Result<()>
    where
        F: FnOnce(*mut c_void) + Send + 'static,
    {
        let api = match api() {
            Ok(api) => api,
            Err(e) => {
                cleanup(value);
                return Err(e);
            }
        };
        let name = match cstring(name) {
            Ok(name) => name,
            Err(e) => {
                cleanup(value);
                return Err(e);
            }
        };
        let boxed: Cleanup = Box::new(cleanup);
        let userdata = Box::into_raw(Box::new(boxed)).cast::<c_void>();
        // SAFETY: ownership of `userdata` passes to SDL, which hands it to the
        // trampoline exactly once, including on failure.
        let ok = unsafe {
            (api.SDL_SetPointerPropertyWithCleanup)(
                self.0,
                name.as_ptr(),
                value,
                Some(cleanup_trampoline),
                userdata,
            )
        };
        check(api, ok, Sdl3Error::Properties)
    }

    pub fn set_string(self, name: &str, value: &str) -> Sdl3Result<()> {
        let api = api()?;
        let name = cstring(name)?;
        let value = cstring(value)?;
        // SAFETY: both strings outlive the call; SDL copies the value.
        let ok = unsafe { (api.SDL_SetStringProperty)(self.0, name.as_ptr(), value.as_ptr()) };
        check(api, ok, Sdl3Error::Properties)
    }

    pub fn set_number(self, name: &str, value: i64) -> Sdl3Result<()> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        let ok = unsafe { (api.SDL_SetNumberProperty)(self.0, name.as_ptr(), value) };
        check(api, ok, Sdl3Error::Properties)
    }

    pub fn set_float(self, name: &str, value: f32) -> Sdl3Result<()> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        let ok = unsafe { (api.SDL_SetFloatProperty)(self.0, name.as_ptr(), value) };
        check(api, ok, Sdl3Error::Properties)
    }

    pub fn set_boolean(self, name: &str, value: bool) -> Sdl3Result<()> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        let ok = unsafe { (api.SDL_SetBooleanProperty)(self.0, name.as_ptr(), value) };
        check(api, ok, Sdl3Error::Properties)
    }

    /// Stores a value of any kind.
    pub fn set(self, name: &str, value: &PropertyValue) -> Sdl3Result<()> {
        match value {
            PropertyValue::Pointer(p) => self.set_pointer(name, *p),
            PropertyValue::String(s) => self.set_string(name, s),
            PropertyValue::Number(n) => self.set_number(name, *n),
            PropertyValue::Float(f) => self.set_float(name, *f),
            PropertyValue::Boolean(b) => self.set_boolean(name, *b),
        }
    }

    /// Stores several values while holding the store lock, so other threads
    /// observe either none or all of them.
    pub fn set_many<I, K>(self, values: I) -> Sdl3Result<()>
    where
        I: IntoIterator<Item = (K, PropertyValue)>,
        K: AsRef<str>,
    {
        let _guard = self.lock()?;
        for (name, value) in values {
            self.set(name.as_ref(), &value)?;
        }
        Ok(())
    }

    pub fn has(self, name: &str) -> Sdl3Result<bool> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        Ok(unsafe { (api.SDL_HasProperty)(self.0, name.as_ptr()) })
    }

    /// Kind of the stored value; [`PropertyType::Invalid`] if absent.
    pub fn property_type(self, name: &str) -> Sdl3Result<PropertyType> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        let raw = unsafe { (api.SDL_GetPropertyType)(self.0, name.as_ptr()) };
        Ok(PropertyType::from_raw(raw).unwrap_or(PropertyType::Invalid))
    }

    pub fn get_pointer(self, name: &str, default: *mut c_void) -> Sdl3Result<*mut c_void> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        Ok(unsafe { (api.SDL_GetPointerProperty)(self.0, name.as_ptr(), default) })
    }

    /// The string value, or `default` if absent. Numbers, floats and booleans
    /// are converted to text by SDL.
    pub fn get_string(self, name: &str, default: &str) -> Sdl3Result<String> {
        let api = api()?;
        let name = cstring(name)?;
        let fallback = cstring(default)?;
        // SAFETY: inputs outlive the call; the returned string is copied
        // before any further SDL call can change the property.
        let value = unsafe {
            borrowed_string((api.SDL_GetStringProperty)(self.0, name.as_ptr(), fallback.as_ptr()))
        };
        Ok(value.unwrap_or_else(|| default.to_string()))
    }

    pub fn get_number(self, name: &str, default: i64) -> Sdl3Result<i64> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        Ok(unsafe { (api.SDL_GetNumberProperty)(self.0, name.as_ptr(), default) })
    }

    pub fn get_float(self, name: &str, default: f32) -> Sdl3Result<f32> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        Ok(unsafe { (api.SDL_GetFloatProperty)(self.0, name.as_ptr(), default) })
    }

    pub fn get_boolean(self, name: &str, default: bool) -> Sdl3Result<bool> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        Ok(unsafe { (api.SDL_GetBooleanProperty)(self.0, name.as_ptr(), default) })
    }

    /// The stored value in its native kind, or `None` if absent.
    pub fn get(self, name: &str) -> Sdl3Result<Option<PropertyValue>> {
        let _guard = self.lock()?;
        let value = match self.property_type(name)? {
            PropertyType::Invalid => None,
            PropertyType::Pointer => Some(PropertyValue::Pointer(
                self.get_pointer(name, std::ptr::null_mut())?,
            )),
            PropertyType::String => Some(PropertyValue::String(self.get_string(name, "")?)),
            PropertyType::Number => Some(PropertyValue::Number(self.get_number(name, 0)?)),
            PropertyType::Float => Some(PropertyValue::Float(self.get_float(name, 0.0)?)),
            PropertyType::Boolean => Some(PropertyValue::Boolean(self.get_boolean(name, false)?)),
        };
        Ok(value)
    }

    /// Removes a property, running its cleanup callback if it has one.
    pub fn clear(self, name: &str) -> Sdl3Result<()> {
        let api = api()?;
        let name = cstring(name)?;
        // SAFETY: `name` outlives the call.
        let ok = unsafe { (api.SDL_ClearProperty)(self.0, name.as_ptr()) };
        check(api, ok, Sdl3Error::Properties)
    }

    /// Calls `callback` with every property name. The store is locked for the
    /// duration. A panic in `callback` stops the enumeration and resumes once
    /// SDL has unlocked the store.
    pub fn enumerate<F>(self, callback: F) -> Sdl3Result<()>
    where
        F: FnMut(PropertiesId, &str),
    {
        let api = api()?;
        let mut state = Enumeration { callback, panic: None };
        let userdata = (&mut state as *mut Enumeration<F>).cast::<c_void>();
        // SAFETY: `state` outlives the call and the trampoline is
        // instantiated for its exact type.
        let ok = unsafe {
            (api.SDL_EnumerateProperties)(self.0, Some(enumerate_trampoline::<F>), userdata)
        };
        if let Some(payload) = state.panic {
            resume_unwind(payload);
        }
        check(api, ok, Sdl3Error::Properties)
    }

    /// Every property name, in SDL's enumeration order.
    pub fn names(self) -> Sdl3Result<Vec<String>> {
        let mut names = Vec::new();
        self.enumerate(|_, name| names.push(name.to_string()))?;
        Ok(names)
    }

    /// Destroys the store, running all cleanup callbacks.
    pub fn destroy(self) -> Sdl3Result<()> {
        let api = api()?;
        // SAFETY: plain id; SDL ignores unknown ids.
        unsafe { (api.SDL_DestroyProperties)(self.0) };
        debug!(props = self.0, "Destroyed property store");
        Ok(())
    }
}

/// Holds a store's lock; unlocks on drop.
#[must_use = "the store is unlocked as soon as the guard is dropped"]
pub struct PropertiesLock {
    id: PropertiesId,
    api: &'static Sdl3Api,
    _not_send: PhantomData<*const ()>,
}

impl PropertiesLock {
    #[must_use]
    pub fn id(&self) -> PropertiesId {
        self.id
    }
}

impl Drop for PropertiesLock {
    fn drop(&mut self) {
        // SAFETY: the lock was taken on this thread by `PropertiesId::lock`.
        unsafe { (self.api.SDL_UnlockProperties)(self.id.0) };
    }
}

/// An owned property store, destroyed on drop.
#[derive(Debug)]
pub struct Properties {
    id: PropertiesId,
}

impl Properties {
    pub fn new() -> Sdl3Result<Self> {
        Ok(Self {
            id: PropertiesId::create()?,
        })
    }

    #[must_use]
    pub fn id(&self) -> PropertiesId {
        self.id
    }

    /// Gives up ownership without destroying the store.
    #[must_use]
    pub fn into_id(self) -> PropertiesId {
        let id = self.id;
        std::mem::forget(self);
        id
    }
}

impl Deref for Properties {
    type Target = PropertiesId;

    fn deref(&self) -> &PropertiesId {
        &self.id
    }
}

impl Drop for Properties {
    fn drop(&mut self) {
        if let Err(e) = self.id.destroy() {
            warn!(props = self.id.0, "Failed to destroy property store: {}", e);
        }
    }
}
