use key_event_reporter::{
    report, KeyIdentity, KeyName, KeySink, KeySource, Record, ReporterError, Result,
};

/// Replays a fixed sequence of presses, then ends like a platform hook would.
struct ScriptedKeys(Vec<KeyIdentity>);

impl KeySource for ScriptedKeys {
    fn listen(self, sink: KeySink) -> Result<()> {
        for key in self.0 {
            if !sink.deliver(key) {
                break;
            }
        }
        Ok(())
    }
}

fn chars(text: &str) -> Vec<KeyIdentity> {
    text.chars().map(KeyIdentity::Character).collect()
}

fn esc() -> KeyIdentity {
    KeyIdentity::Named(KeyName::Esc)
}

async fn run_script(keys: Vec<KeyIdentity>) -> Vec<String> {
    let out = report(ScriptedKeys(keys), Vec::new()).await.unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[tokio::test]
async fn test_characters_then_escape() {
    let mut keys = chars("aB");
    keys.push(esc());

    let lines = run_script(keys).await;

    assert_eq!(
        lines,
        vec![
            r#"{"type":"press","key":"a"}"#,
            r#"{"type":"press","key":"B"}"#,
            r#"{"type":"press","key":"Key.esc"}"#,
            r#"{"type":"exit"}"#,
        ]
    );
}

#[tokio::test]
async fn test_special_keys_only() {
    let lines = run_script(vec![KeyIdentity::Named(KeyName::Shift), esc()]).await;

    assert_eq!(
        lines,
        vec![
            r#"{"type":"press","key":"Key.shift"}"#,
            r#"{"type":"press","key":"Key.esc"}"#,
            r#"{"type":"exit"}"#,
        ]
    );
}

#[tokio::test]
async fn test_nothing_after_escape() {
    let mut keys = chars("x");
    keys.push(esc());
    keys.extend(chars("yz"));
    keys.push(esc());

    let lines = run_script(keys).await;

    assert_eq!(lines.len(), 3);
    assert_eq!(lines.last().unwrap(), r#"{"type":"exit"}"#);
    assert_eq!(lines.iter().filter(|l| l.contains("exit")).count(), 1);
}

#[tokio::test]
async fn test_every_line_is_standalone_json() {
    let mut keys = chars("\"\\{ü");
    keys.extend([
        KeyIdentity::Named(KeyName::Enter),
        KeyIdentity::Named(KeyName::F(11)),
        KeyIdentity::Named(KeyName::Unknown(65437)),
        esc(),
    ]);

    let lines = run_script(keys).await;
    assert_eq!(lines.len(), 9);

    let records: Vec<Record> = lines
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let press_keys: Vec<&str> = records
        .iter()
        .filter_map(|r| match r {
            Record::Press { key } => Some(key.as_str()),
            Record::Exit => None,
        })
        .collect();
    assert_eq!(
        press_keys,
        vec!["\"", "\\", "{", "ü", "Key.enter", "Key.f11", "<65437>", "Key.esc"]
    );
    assert_eq!(records.last(), Some(&Record::Exit));

    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.values().all(|v| v.is_string()));
    }
}

#[tokio::test]
async fn test_source_without_escape_ends_quietly() {
    let lines = run_script(chars("hi")).await;
    assert_eq!(
        lines,
        vec![
            r#"{"type":"press","key":"h"}"#,
            r#"{"type":"press","key":"i"}"#,
        ]
    );
}

struct Denied;

impl KeySource for Denied {
    fn listen(self, _sink: KeySink) -> Result<()> {
        Err(ReporterError::hook("input monitoring not permitted"))
    }
}

#[tokio::test]
async fn test_hook_failure_propagates() {
    let err = report(Denied, Vec::new()).await.unwrap_err();
    assert!(matches!(err, ReporterError::Hook(_)));
    assert_eq!(
        err.to_string(),
        "input hook error: input monitoring not permitted"
    );
}
