use crate::types::OutputFormat;
use edjournal_types::Event;

/// One output line for `event`
pub fn render(event: &Event, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(event),
        OutputFormat::Plain => Ok(format!(
            "{}  {}",
            event.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
            event.name()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edjournal_decoder::{Fleet, JournalDecoder};

    fn event(raw: &str) -> Event {
        JournalDecoder::new(Fleet::new().shared())
            .decode(raw)
            .unwrap()
    }

    #[test]
    fn test_plain_line() {
        let event = event(r#"{"timestamp":"2017-10-06T23:47:32Z","event":"Promotion","Federation":13}"#);
        assert_eq!(
            render(&event, OutputFormat::Plain).unwrap(),
            "2017-10-06T23:47:32Z  Federation promotion"
        );
    }

    #[test]
    fn test_json_line_is_single_line() {
        let event = event(r#"{"timestamp":"2017-10-06T23:47:32Z","event":"Undocked","StationName":"Jameson Memorial"}"#);
        let line = render(&event, OutputFormat::Json).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["type"], "undocked");
        assert_eq!(value["content"]["station"], "Jameson Memorial");
    }
}
