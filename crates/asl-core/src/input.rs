//! Physical input catalog: devices and the inputs a source can bind to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

named_enum! {
    /// Keys of a standard keyboard.
    pub enum KeyboardKey {
        A => "a", B => "b", C => "c", D => "d", E => "e", F => "f", G => "g",
        H => "h", I => "i", J => "j", K => "k", L => "l", M => "m", N => "n",
        O => "o", P => "p", Q => "q", R => "r", S => "s", T => "t", U => "u",
        V => "v", W => "w", X => "x", Y => "y", Z => "z",
        Digit0 => "0", Digit1 => "1", Digit2 => "2", Digit3 => "3", Digit4 => "4",
        Digit5 => "5", Digit6 => "6", Digit7 => "7", Digit8 => "8", Digit9 => "9",
        Space => "space",
        Enter => "enter",
        Escape => "escape",
        Tab => "tab",
        Backspace => "backspace",
        LeftShift => "lshift",
        RightShift => "rshift",
        LeftCtrl => "lctrl",
        RightCtrl => "rctrl",
        LeftAlt => "lalt",
        RightAlt => "ralt",
        Up => "up",
        Down => "down",
        Left => "left",
        Right => "right",
        F1 => "f1", F2 => "f2", F3 => "f3", F4 => "f4", F5 => "f5", F6 => "f6",
        F7 => "f7", F8 => "f8", F9 => "f9", F10 => "f10", F11 => "f11", F12 => "f12",
    }
}

named_enum! {
    pub enum MouseButton {
        Left => "left",
        Right => "right",
        Middle => "middle",
        Back => "back",
        Forward => "forward",
    }
}

named_enum! {
    pub enum MouseAxis {
        /// Cursor position in window coordinates.
        Position => "pos",
        /// Cursor movement since the previous frame.
        Delta => "delta",
        Wheel => "wheel",
    }
}

named_enum! {
    pub enum GamepadButton {
        A => "a",
        B => "b",
        X => "x",
        Y => "y",
        LeftBumper => "lb",
        RightBumper => "rb",
        LeftStick => "ls",
        RightStick => "rs",
        Start => "start",
        Select => "select",
        DpadUp => "dpad_up",
        DpadDown => "dpad_down",
        DpadLeft => "dpad_left",
        DpadRight => "dpad_right",
    }
}

named_enum! {
    pub enum GamepadAxis {
        LeftStick => "left_stick",
        RightStick => "right_stick",
        LeftTrigger => "lt",
        RightTrigger => "rt",
    }
}

impl MouseAxis {
    pub fn dimensions(self) -> u8 {
        match self {
            MouseAxis::Position | MouseAxis::Delta => 2,
            MouseAxis::Wheel => 1,
        }
    }
}

impl GamepadAxis {
    pub fn dimensions(self) -> u8 {
        match self {
            GamepadAxis::LeftStick | GamepadAxis::RightStick => 2,
            GamepadAxis::LeftTrigger | GamepadAxis::RightTrigger => 1,
        }
    }
}

/// Input device family. Several spellings are accepted per device; `name()`
/// returns the canonical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    Keyboard,
    Mouse,
    Gamepad,
}

impl Device {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "kb" | "keyboard" => Some(Device::Keyboard),
            "mouse" | "ms" => Some(Device::Mouse),
            "gp" | "gamepad" | "pad" => Some(Device::Gamepad),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Device::Keyboard => "kb",
            Device::Mouse => "mouse",
            Device::Gamepad => "gp",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonInput {
    Mouse(MouseButton),
    Gamepad(GamepadButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisInput {
    Mouse(MouseAxis),
    Gamepad(GamepadAxis),
}

impl AxisInput {
    pub fn dimensions(self) -> u8 {
        match self {
            AxisInput::Mouse(axis) => axis.dimensions(),
            AxisInput::Gamepad(axis) => axis.dimensions(),
        }
    }
}

/// One physical input a source reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Binding {
    Key(KeyboardKey),
    Button(ButtonInput),
    Axis(AxisInput),
}

impl Binding {
    /// Resolves a `device.input` pair as written in a script.
    ///
    /// Mouse and gamepad names are looked up among buttons first, then axes.
    pub fn resolve(device: &str, input: &str) -> Result<Self, DefinitionError> {
        let Some(dev) = Device::from_name(device) else {
            return Err(DefinitionError::UnknownDevice(device.to_owned()));
        };

        let binding = match dev {
            Device::Keyboard => KeyboardKey::from_name(input).map(Binding::Key),
            Device::Mouse => MouseButton::from_name(input)
                .map(|b| Binding::Button(ButtonInput::Mouse(b)))
                .or_else(|| MouseAxis::from_name(input).map(|a| Binding::Axis(AxisInput::Mouse(a)))),
            Device::Gamepad => GamepadButton::from_name(input)
                .map(|b| Binding::Button(ButtonInput::Gamepad(b)))
                .or_else(|| {
                    GamepadAxis::from_name(input).map(|a| Binding::Axis(AxisInput::Gamepad(a)))
                }),
        };

        binding.ok_or_else(|| DefinitionError::UnknownInput {
            device: device.to_owned(),
            input: input.to_owned(),
        })
    }

    pub fn device(&self) -> Device {
        match self {
            Binding::Key(_) => Device::Keyboard,
            Binding::Button(ButtonInput::Mouse(_)) | Binding::Axis(AxisInput::Mouse(_)) => {
                Device::Mouse
            }
            Binding::Button(ButtonInput::Gamepad(_)) | Binding::Axis(AxisInput::Gamepad(_)) => {
                Device::Gamepad
            }
        }
    }

    pub fn input_name(&self) -> &'static str {
        match self {
            Binding::Key(key) => key.name(),
            Binding::Button(ButtonInput::Mouse(b)) => b.name(),
            Binding::Button(ButtonInput::Gamepad(b)) => b.name(),
            Binding::Axis(AxisInput::Mouse(a)) => a.name(),
            Binding::Axis(AxisInput::Gamepad(a)) => a.name(),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.device(), self.input_name())
    }
}
