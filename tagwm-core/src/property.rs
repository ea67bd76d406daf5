//! Name-keyed access to window state for the binding layer.
//!
//! Every externally settable attribute is a [`Property`]. [`State::get_property`],
//! [`State::set_property`] and [`State::set_and_get_property`] dispatch on it to the typed
//! setters, so the binding layer never needs to know about them. Values of the wrong type are
//! rejected the same way out-of-range values are: silently, with the property left unchanged.
use crate::errors::{Result, TagwmError};
use crate::models::{Axis, Color, Handle, Strut, TagId, WindowHandle, WindowState};
use crate::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    BorderColor,
    BorderWidth,
    Sticky,
    Ontop,
    Above,
    Below,
    Minimized,
    Fullscreen,
    Modal,
    MaximizedHorizontal,
    MaximizedVertical,
    Tags,
    Struts,
}

impl Property {
    pub const ALL: [Property; 14] = [
        Self::Opacity,
        Self::BorderColor,
        Self::BorderWidth,
        Self::Sticky,
        Self::Ontop,
        Self::Above,
        Self::Below,
        Self::Minimized,
        Self::Fullscreen,
        Self::Modal,
        Self::MaximizedHorizontal,
        Self::MaximizedVertical,
        Self::Tags,
        Self::Struts,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::BorderColor => "border_color",
            Self::BorderWidth => "border_width",
            Self::Sticky => "sticky",
            Self::Ontop => "ontop",
            Self::Above => "above",
            Self::Below => "below",
            Self::Minimized => "minimized",
            Self::Fullscreen => "fullscreen",
            Self::Modal => "modal",
            Self::MaximizedHorizontal => "maximized_horizontal",
            Self::MaximizedVertical => "maximized_vertical",
            Self::Tags => "tags",
            Self::Struts => "struts",
        }
    }

    /// The boolean window state backing this property, if it is one.
    pub const fn state(self) -> Option<WindowState> {
        match self {
            Self::Sticky => Some(WindowState::Sticky),
            Self::Ontop => Some(WindowState::OnTop),
            Self::Above => Some(WindowState::Above),
            Self::Below => Some(WindowState::Below),
            Self::Minimized => Some(WindowState::Hidden),
            Self::Fullscreen => Some(WindowState::Fullscreen),
            Self::Modal => Some(WindowState::Modal),
            Self::MaximizedHorizontal => Some(WindowState::MaximizedHorz),
            Self::MaximizedVertical => Some(WindowState::MaximizedVert),
            Self::Opacity | Self::BorderColor | Self::BorderWidth | Self::Tags | Self::Struts => {
                None
            }
        }
    }
}

impl From<WindowState> for Property {
    fn from(state: WindowState) -> Self {
        match state {
            WindowState::Modal => Self::Modal,
            WindowState::Sticky => Self::Sticky,
            WindowState::MaximizedVert => Self::MaximizedVertical,
            WindowState::MaximizedHorz => Self::MaximizedHorizontal,
            WindowState::Hidden => Self::Minimized,
            WindowState::Fullscreen => Self::Fullscreen,
            WindowState::Above => Self::Above,
            WindowState::Below => Self::Below,
            WindowState::OnTop => Self::Ontop,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = TagwmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| TagwmError::UnknownProperty(s.to_owned()))
    }
}

/// A property value as exchanged with the binding layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Value {
    /// No value. Reading an unset opacity yields this; writing it resets the opacity.
    Nil,
    Bool(bool),
    Integer(i64),
    Number(f64),
    /// A color name or `#rrggbb` string.
    Str(String),
    Color(Color),
    Tags(Vec<TagId>),
    Strut(Strut),
}

impl<H: Handle> State<H> {
    /// Reads `property` of a window. Unknown windows read as [`Value::Nil`].
    pub fn get_property(&self, handle: &WindowHandle<H>, property: Property) -> Value {
        let Some(window) = self.window(handle) else {
            return Value::Nil;
        };
        if let Some(state) = property.state() {
            return Value::Bool(window.has_state(state));
        }
        match property {
            Property::Opacity => window.opacity().map_or(Value::Nil, Value::Number),
            Property::BorderColor => Value::Color(window.border_color()),
            Property::BorderWidth => Value::Integer(i64::from(window.border_width())),
            Property::Tags => Value::Tags(window.tags().to_vec()),
            Property::Struts => Value::Strut(window.strut()),
            _ => Value::Nil,
        }
    }

    /// Writes `property` of a window through its setter.
    pub fn set_property(&mut self, handle: &WindowHandle<H>, property: Property, value: Value) {
        match (property, value) {
            (Property::Opacity, Value::Nil) => self.set_opacity(handle, None),
            (Property::Opacity, Value::Number(n)) => self.set_opacity(handle, Some(n)),
            #[allow(clippy::cast_precision_loss)]
            (Property::Opacity, Value::Integer(n)) => self.set_opacity(handle, Some(n as f64)),
            (Property::BorderColor, Value::Str(name)) => self.set_border_color(handle, &name),
            (Property::BorderColor, Value::Color(color)) => {
                self.set_border_color_value(handle, color);
            }
            (Property::BorderWidth, Value::Integer(width)) => {
                // Anything outside i32 is out of range for a border either way.
                let width = i32::try_from(width).unwrap_or(-1);
                self.set_border_width(handle, width);
            }
            (Property::BorderWidth, Value::Number(width)) if width.fract() == 0.0 => {
                let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&width);
                let width = if in_range { width as i32 } else { -1 };
                self.set_border_width(handle, width);
            }
            (Property::Sticky, Value::Bool(b)) => self.set_sticky(handle, b),
            (Property::Ontop, Value::Bool(b)) => self.set_ontop(handle, b),
            (Property::Above, Value::Bool(b)) => self.set_above(handle, b),
            (Property::Below, Value::Bool(b)) => self.set_below(handle, b),
            (Property::Minimized, Value::Bool(b)) => self.set_minimized(handle, b),
            (Property::Fullscreen, Value::Bool(b)) => self.set_fullscreen(handle, b),
            (Property::Modal, Value::Bool(b)) => self.set_modal(handle, b),
            (Property::MaximizedHorizontal, Value::Bool(b)) => {
                self.set_maximized(handle, Axis::Horizontal, b);
            }
            (Property::MaximizedVertical, Value::Bool(b)) => {
                self.set_maximized(handle, Axis::Vertical, b);
            }
            (Property::Tags, Value::Tags(tags)) => self.set_tags(handle, &tags),
            (Property::Struts, Value::Strut(strut)) => self.set_struts(handle, strut),
            (property, value) => {
                tracing::debug!("Ignoring {:?} for property {}", value, property);
            }
        }
    }

    /// Writes `property`, then reports the value it ended up with.
    pub fn set_and_get_property(
        &mut self,
        handle: &WindowHandle<H>,
        property: Property,
        value: Value,
    ) -> Value {
        self.set_property(handle, property, value);
        self.get_property(handle, property)
    }

    /// [`State::get_property`] keyed by the property's name.
    ///
    /// # Errors
    ///
    /// Errors if `name` is not a known property.
    pub fn get_property_by_name(&self, handle: &WindowHandle<H>, name: &str) -> Result<Value> {
        Ok(self.get_property(handle, name.parse()?))
    }

    /// [`State::set_property`] keyed by the property's name.
    ///
    /// # Errors
    ///
    /// Errors if `name` is not a known property. Invalid values are not errors.
    pub fn set_property_by_name(
        &mut self,
        handle: &WindowHandle<H>,
        name: &str,
        value: Value,
    ) -> Result<()> {
        self.set_property(handle, name.parse()?, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, WindowHandle};

    fn subject() -> (State<MockHandle>, WindowHandle<MockHandle>) {
        let mut state = State::new_test(vec!["1".to_owned(), "2".to_owned()]);
        let handle = WindowHandle(1);
        state.manage_window(handle, None);
        (state, handle)
    }

    #[test]
    fn names_round_trip() {
        for property in Property::ALL {
            assert_eq!(property.as_str().parse::<Property>(), Ok(property));
        }
        assert_eq!(
            "floating".parse::<Property>(),
            Err(TagwmError::UnknownProperty("floating".to_owned()))
        );
    }

    #[test]
    fn serde_uses_the_same_names() {
        let json = serde_json::to_string(&Property::MaximizedVertical).unwrap();
        assert_eq!(json, "\"maximized_vertical\"");
    }

    #[test]
    fn boolean_properties_read_and_write() {
        let (mut state, handle) = subject();
        for property in Property::ALL.into_iter().filter(|p| p.state().is_some()) {
            let value = state.set_and_get_property(&handle, property, Value::Bool(true));
            assert_eq!(value, Value::Bool(true), "{property} did not stick");
        }
    }

    #[test]
    fn unset_opacity_reads_as_nil() {
        let (mut state, handle) = subject();
        assert_eq!(state.get_property(&handle, Property::Opacity), Value::Nil);
        state.set_property(&handle, Property::Opacity, Value::Number(0.25));
        assert_eq!(
            state.get_property(&handle, Property::Opacity),
            Value::Number(0.25)
        );
        state.set_property(&handle, Property::Opacity, Value::Nil);
        assert_eq!(state.get_property(&handle, Property::Opacity), Value::Nil);
    }

    #[test]
    fn mistyped_values_are_ignored() {
        let (mut state, handle) = subject();
        state.set_property(&handle, Property::Sticky, Value::Integer(1));
        state.set_property(&handle, Property::BorderWidth, Value::Number(2.5));
        state.set_property(&handle, Property::Tags, Value::Bool(true));
        assert_eq!(
            state.get_property(&handle, Property::Sticky),
            Value::Bool(false)
        );
        assert_eq!(
            state.get_property(&handle, Property::BorderWidth),
            Value::Integer(1)
        );
        assert_eq!(
            state.get_property(&handle, Property::Tags),
            Value::Tags(vec![])
        );
    }

    #[test]
    fn oversized_border_widths_are_rejected_either_way() {
        let (mut state, handle) = subject();
        state.set_property(&handle, Property::BorderWidth, Value::Number(1e20));
        state.set_property(&handle, Property::BorderWidth, Value::Integer(1 << 40));
        assert_eq!(
            state.get_property(&handle, Property::BorderWidth),
            Value::Integer(1)
        );
        let width = state.set_and_get_property(&handle, Property::BorderWidth, Value::Number(3.0));
        assert_eq!(width, Value::Integer(3));
    }

    #[test]
    fn border_color_accepts_names() {
        let (mut state, handle) = subject();
        let value = state.set_and_get_property(
            &handle,
            Property::BorderColor,
            Value::Str("#ff0000".to_owned()),
        );
        assert_eq!(value, Value::Color(Color::rgb(0xff, 0, 0)));
        let value = state.set_and_get_property(
            &handle,
            Property::BorderColor,
            Value::Str("nonsense".to_owned()),
        );
        assert_eq!(value, Value::Color(Color::rgb(0xff, 0, 0)));
    }

    #[test]
    fn tags_and_struts_go_through_the_table() {
        let (mut state, handle) = subject();
        let tags = state.set_and_get_property(&handle, Property::Tags, Value::Tags(vec![2]));
        assert_eq!(tags, Value::Tags(vec![2]));
        let strut = Strut::new(0, 0, 24, 0);
        let struts = state.set_and_get_property(&handle, Property::Struts, Value::Strut(strut));
        assert_eq!(struts, Value::Strut(strut));
    }

    #[test]
    fn by_name_access_rejects_unknown_names() {
        let (mut state, handle) = subject();
        assert!(state
            .set_property_by_name(&handle, "above", Value::Bool(true))
            .is_ok());
        assert_eq!(
            state.get_property_by_name(&handle, "above"),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            state.set_property_by_name(&handle, "urgent", Value::Bool(true)),
            Err(TagwmError::UnknownProperty("urgent".to_owned()))
        );
    }

    #[test]
    fn unknown_windows_read_as_nil() {
        let (state, _) = subject();
        assert_eq!(
            state.get_property(&WindowHandle(99), Property::Above),
            Value::Nil
        );
    }
}
