//! End-to-end behaviour of `padctl::run` against a mocked xinput

use mockall::mock;
use pretty_assertions::assert_eq;

use padctl::{Action, Config, Error, Runner};

mock! {
    Xinput {}
    
    impl Runner for Xinput {
        fn run(&self, args: &[String]) -> padctl_exec::Result<String>;
        fn program(&self) -> String;
    }
}

const LISTING: &str = "\
⎡ Virtual core pointer                    \tid=2\t[master pointer  (3)]
⎜   ↳ Virtual core XTEST pointer              \tid=4\t[slave  pointer  (2)]
⎜   ↳ Sentelic Touchpad  id=11  [slave pointer]
⎣ Virtual core keyboard                   \tid=3\t[master keyboard (2)]
";

fn props(enabled: bool) -> String {
    format!(
        "Device 'Sentelic Touchpad':\n\tDevice Enabled (138): {}\n\tDevice Accel Profile (265):\t0\n",
        if enabled { 1 } else { 0 }
    )
}

fn is(args: &[String], expected: &[&str]) -> bool {
    args.iter().map(String::as_str).eq(expected.iter().copied())
}

fn is_set(args: &[String]) -> bool {
    args.first().map(String::as_str) == Some("--set-prop")
}

fn xinput(enabled: bool) -> MockXinput {
    let mut mock = MockXinput::new();
    mock.expect_program().return_const("xinput".to_string());
    mock.expect_run()
        .withf(|args| is(args, &["--list"]))
        .times(1)
        .returning(|_| Ok(LISTING.to_string()));
    mock.expect_run()
        .withf(|args| is(args, &["--list-props", "11"]))
        .returning(move |_| Ok(props(enabled)));
    mock
}

fn expect_set(mock: &mut MockXinput, value: &'static str) {
    mock.expect_run()
        .withf(move |args| is(args, &["--set-prop", "11", "138", value]))
        .times(1)
        .returning(|_| Ok(String::new()));
}

#[test]
fn toggle_default_device_disables_enabled_touchpad() {
    let mut mock = xinput(true);
    expect_set(&mut mock, "0");
    
    let enabled = padctl::run(&Config::default(), Action::Toggle, mock).unwrap();
    assert_eq!(enabled, false);
}

#[test]
fn toggle_enables_disabled_touchpad() {
    let mut mock = xinput(false);
    expect_set(&mut mock, "1");
    
    assert_eq!(padctl::run(&Config::default(), Action::Toggle, mock).unwrap(), true);
}

#[test]
fn on_and_off_ignore_current_state() {
    for current in [true, false] {
        let mut mock = xinput(current);
        expect_set(&mut mock, "1");
        assert_eq!(padctl::run(&Config::default(), Action::On, mock).unwrap(), true);
        
        let mut mock = xinput(current);
        expect_set(&mut mock, "0");
        assert_eq!(padctl::run(&Config::default(), Action::Off, mock).unwrap(), false);
    }
}

#[test]
fn unknown_name_fails_without_setting() {
    let mut mock = MockXinput::new();
    mock.expect_program().return_const("xinput".to_string());
    mock.expect_run()
        .withf(|args| is(args, &["--list"]))
        .returning(|_| Ok(LISTING.to_string()));
    mock.expect_run().withf(|args| is_set(args)).never();
    
    let config = Config {
        device_name: "DoesNotExist".to_string(),
        ..Config::default()
    };
    
    let err = padctl::run(&config, Action::Toggle, mock).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().contains("DoesNotExist"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn listing_failure_is_command_failed() {
    let mut mock = MockXinput::new();
    mock.expect_program().return_const("xinput".to_string());
    mock.expect_run()
        .withf(|args| is(args, &["--list"]))
        .returning(|_| {
            Err(padctl_exec::Error::NotFound {
                program: "xinput".to_string(),
            })
        });
    mock.expect_run().withf(|args| is_set(args)).never();
    
    let err = padctl::run(&Config::default(), Action::On, mock).unwrap_err();
    assert!(matches!(err, Error::CommandFailed(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn missing_enabled_property_fails_without_setting() {
    let mut mock = MockXinput::new();
    mock.expect_program().return_const("xinput".to_string());
    mock.expect_run()
        .withf(|args| is(args, &["--list"]))
        .returning(|_| Ok(LISTING.to_string()));
    mock.expect_run()
        .withf(|args| is(args, &["--list-props", "11"]))
        .returning(|_| Ok("Device 'Sentelic Touchpad':\n\tDevice Accel Profile (265):\t0\n".to_string()));
    mock.expect_run().withf(|args| is_set(args)).never();
    
    let err = padctl::run(&Config::default(), Action::Toggle, mock).unwrap_err();
    assert!(matches!(
        err,
        Error::ParseFailed(padctl_core::Error::MissingEnabledProperty { .. })
    ));
}

#[test]
fn set_failure_is_reported() {
    let mut mock = xinput(true);
    mock.expect_run()
        .withf(|args| is_set(args))
        .times(1)
        .returning(|_| {
            Err(padctl_exec::Error::NonZeroExit {
                program: "xinput".to_string(),
                code: Some(1),
                stderr: "X Error of failed request: BadMatch".to_string(),
            })
        });
    
    let err = padctl::run(&Config::default(), Action::Off, mock).unwrap_err();
    assert!(matches!(err, Error::CommandFailed(padctl_exec::Error::NonZeroExit { .. })));
    assert!(err.to_string().contains("BadMatch"));
}
