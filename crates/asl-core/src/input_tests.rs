use crate::{
    AxisInput, Binding, ButtonInput, DefinitionError, Device, GamepadAxis, GamepadButton,
    KeyboardKey, MouseAxis, MouseButton,
};

#[test]
fn resolve_keyboard_key() {
    let binding = Binding::resolve("kb", "space").unwrap();
    assert_eq!(binding, Binding::Key(KeyboardKey::Space));
    assert_eq!(binding.device(), Device::Keyboard);
}

#[test]
fn resolve_device_aliases() {
    assert_eq!(
        Binding::resolve("keyboard", "w").unwrap(),
        Binding::Key(KeyboardKey::W)
    );
    assert_eq!(
        Binding::resolve("pad", "a").unwrap(),
        Binding::Button(ButtonInput::Gamepad(GamepadButton::A))
    );
    assert_eq!(
        Binding::resolve("ms", "left").unwrap(),
        Binding::Button(ButtonInput::Mouse(MouseButton::Left))
    );
}

#[test]
fn resolve_digit_key() {
    assert_eq!(
        Binding::resolve("kb", "1").unwrap(),
        Binding::Key(KeyboardKey::Digit1)
    );
}

#[test]
fn resolve_axes() {
    assert_eq!(
        Binding::resolve("mouse", "pos").unwrap(),
        Binding::Axis(AxisInput::Mouse(MouseAxis::Position))
    );
    assert_eq!(
        Binding::resolve("gp", "left_stick").unwrap(),
        Binding::Axis(AxisInput::Gamepad(GamepadAxis::LeftStick))
    );
    assert_eq!(AxisInput::Gamepad(GamepadAxis::RightTrigger).dimensions(), 1);
}

#[test]
fn resolve_unknown_device() {
    assert_eq!(
        Binding::resolve("joystick", "a"),
        Err(DefinitionError::UnknownDevice("joystick".into()))
    );
}

#[test]
fn resolve_unknown_input() {
    let err = Binding::resolve("kb", "lt").unwrap_err();
    assert_eq!(err.to_string(), "device `kb` has no input named `lt`");
}

#[test]
fn display_uses_canonical_device() {
    let binding = Binding::resolve("gamepad", "dpad_up").unwrap();
    assert_eq!(binding.to_string(), "gp.dpad_up");
}

#[test]
fn names_round_trip() {
    for key in KeyboardKey::ALL {
        assert_eq!(KeyboardKey::from_name(key.name()), Some(*key));
    }
    for button in GamepadButton::ALL {
        assert_eq!(GamepadButton::from_name(button.name()), Some(*button));
    }
}
