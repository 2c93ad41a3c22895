//! RecordedVoiceovers 端到端场景（公开 API）

use serde_json::{json, Value};
use voxmap::domain::voiceover::{RecordedVoiceoversDict, VoiceoverDict};
use voxmap::{RecordedVoiceovers, Voiceover, VoiceoverError};

fn backend_dict() -> Value {
    json!({
        "voiceovers_mapping": {
            "content": {
                "en": {"filename": "filename1.mp3", "file_size_bytes": 100000, "needs_update": false},
                "hi": {"filename": "filename2.mp3", "file_size_bytes": 11000, "needs_update": false}
            },
            "default_outcome": {
                "en": {"filename": "filename3.mp3", "file_size_bytes": 3000, "needs_update": false},
                "hi": {"filename": "filename4.mp3", "file_size_bytes": 5000, "needs_update": false}
            },
            "feedback_1": {
                "en": {"filename": "filename5.mp3", "file_size_bytes": 2000, "needs_update": false},
                "hi": {"filename": "filename6.mp3", "file_size_bytes": 9000, "needs_update": false}
            },
            "feedback_2": {
                "en": {"filename": "filename7.mp3", "file_size_bytes": 1000, "needs_update": false},
                "hi": {"filename": "filename8.mp3", "file_size_bytes": 600, "needs_update": false}
            },
            "hint_1": {
                "en": {"filename": "filename9.mp3", "file_size_bytes": 104000, "needs_update": false},
                "hi": {"filename": "filename10.mp3", "file_size_bytes": 1000, "needs_update": true}
            },
            "hint_2": {},
            "solution": {
                "en": {"filename": "filename13.mp3", "file_size_bytes": 15080, "needs_update": false},
                "hi": {"filename": "filename14.mp3", "file_size_bytes": 10500, "needs_update": false}
            }
        }
    })
}

fn recorded() -> RecordedVoiceovers {
    let dict: RecordedVoiceoversDict = serde_json::from_value(backend_dict()).unwrap();
    RecordedVoiceovers::from_backend_dict(dict).unwrap()
}

fn voiceover(filename: &str, file_size_bytes: u64, needs_update: bool) -> Voiceover {
    Voiceover::from_dict(VoiceoverDict {
        filename: filename.to_string(),
        file_size_bytes,
        needs_update,
    })
    .unwrap()
}

#[test]
fn test_all_content_ids_in_order() {
    assert_eq!(
        recorded().all_content_ids(),
        vec![
            "content",
            "default_outcome",
            "feedback_1",
            "feedback_2",
            "hint_1",
            "hint_2",
            "solution"
        ]
    );
}

#[test]
fn test_bindable_voiceovers() {
    let recorded = recorded();
    let voiceovers = recorded.bindable_voiceovers("content").unwrap();

    assert_eq!(voiceovers.len(), 2);
    assert_eq!(voiceovers["en"], voiceover("filename1.mp3", 100000, false));
    assert_eq!(voiceovers["hi"], voiceover("filename2.mp3", 11000, false));
}

#[test]
fn test_get_voiceover() {
    let recorded = recorded();
    let hint = recorded.voiceover("hint_1", "en").unwrap();
    assert_eq!(hint, &voiceover("filename9.mp3", 104000, false));
    assert_eq!(hint.filename(), "filename9.mp3");
}

#[test]
fn test_mark_all_voiceovers_as_needing_update() {
    let mut recorded = recorded();
    recorded.mark_all_voiceovers_as_needing_update("content").unwrap();

    let voiceovers = recorded.bindable_voiceovers("content").unwrap();
    assert_eq!(voiceovers["en"], voiceover("filename1.mp3", 100000, true));
    assert_eq!(voiceovers["hi"], voiceover("filename2.mp3", 11000, true));
    assert!(!recorded.voiceover("solution", "en").unwrap().needs_update());
}

#[test]
fn test_language_codes() {
    assert_eq!(
        recorded().voiceover_language_codes("hint_1").unwrap(),
        vec!["en", "hi"]
    );
}

#[test]
fn test_has_voiceovers() {
    let recorded = recorded();
    assert!(recorded.has_voiceovers("content"));
    assert!(!recorded.has_voiceovers("hint_2"));
    assert!(!recorded.has_voiceovers("feedback_3"));
}

#[test]
fn test_has_unflagged_voiceovers() {
    let mut recorded = recorded();
    assert!(recorded.has_unflagged_voiceovers("content"));

    recorded.mark_all_voiceovers_as_needing_update("solution").unwrap();
    assert!(!recorded.has_unflagged_voiceovers("solution"));
    assert!(!recorded.has_unflagged_voiceovers("hint_2"));
}

#[test]
fn test_add_content_id() {
    let mut recorded = recorded();
    recorded.add_content_id("feedback_3").unwrap();

    assert!(recorded.bindable_voiceovers("feedback_3").unwrap().is_empty());
    assert_eq!(recorded.all_content_ids().last().unwrap(), "feedback_3");

    let err = recorded.add_content_id("content").unwrap_err();
    assert_eq!(err, VoiceoverError::DuplicateContentId("content".to_string()));
    assert!(err.is_duplicate());
}

#[test]
fn test_delete_content_id() {
    let mut recorded = recorded();
    recorded.delete_content_id("feedback_1").unwrap();

    assert_eq!(
        recorded.all_content_ids(),
        vec![
            "content",
            "default_outcome",
            "feedback_2",
            "hint_1",
            "hint_2",
            "solution"
        ]
    );

    let err = recorded.delete_content_id("feedback_1").unwrap_err();
    assert_eq!(err, VoiceoverError::ContentIdNotFound("feedback_1".to_string()));
    assert_eq!(
        err.to_string(),
        "Unable to find the given content id: feedback_1"
    );
}

#[test]
fn test_add_voiceover() {
    let mut recorded = recorded();
    recorded.add_voiceover("hint_2", "en", "filename11.mp3", 1000).unwrap();

    let voiceovers = recorded.bindable_voiceovers("hint_2").unwrap();
    assert_eq!(voiceovers.len(), 1);
    assert_eq!(voiceovers["en"], voiceover("filename11.mp3", 1000, false));

    let err = recorded
        .add_voiceover("content", "en", "filename.mp3", 1000)
        .unwrap_err();
    assert_eq!(
        err,
        VoiceoverError::DuplicateLanguageCode {
            content_id: "content".to_string(),
            language_code: "en".to_string(),
        }
    );
}

#[test]
fn test_delete_voiceover() {
    let mut recorded = recorded();
    recorded.delete_voiceover("content", "hi").unwrap();

    let voiceovers = recorded.bindable_voiceovers("content").unwrap();
    assert_eq!(voiceovers.len(), 1);
    assert_eq!(voiceovers["en"], voiceover("filename1.mp3", 100000, false));
}

#[test]
fn test_toggle_needs_update_attribute() {
    let mut recorded = recorded();
    recorded.toggle_needs_update_attribute("content", "hi").unwrap();
    assert_eq!(
        recorded.voiceover("content", "hi").unwrap(),
        &voiceover("filename2.mp3", 11000, true)
    );

    recorded.toggle_needs_update_attribute("content", "hi").unwrap();
    assert_eq!(
        recorded.voiceover("content", "hi").unwrap(),
        &voiceover("filename2.mp3", 11000, false)
    );
}

#[test]
fn test_live_view_mutation_visible_in_backend_dict() {
    let mut recorded = recorded();
    recorded
        .bindable_voiceovers_mut("solution")
        .unwrap()
        .get_mut("hi")
        .unwrap()
        .toggle_needs_update();

    let dict = recorded.to_backend_dict();
    assert!(dict.voiceovers_mapping["solution"]["hi"].needs_update);
}

#[test]
fn test_to_backend_dict_round_trip() {
    let original = backend_dict();
    let dict = recorded().to_backend_dict();

    let serialized = serde_json::to_value(&dict).unwrap();
    assert_eq!(serialized, original);
    // 键顺序同样需要保持
    assert_eq!(
        serde_json::to_string(&serialized).unwrap(),
        serde_json::to_string(&original).unwrap()
    );
}

#[test]
fn test_aggregate_serializes_as_backend_dict() {
    let recorded = recorded();
    let value = serde_json::to_value(&recorded).unwrap();
    assert_eq!(value, backend_dict());

    let parsed: RecordedVoiceovers = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.all_content_ids(), recorded.all_content_ids());
}
