#[cfg(test)]
mod tests {
    use rollcall::libs::record::{AttendanceRecord, RecordId, Seq};

    const FULL_RECORD: &str = r#"{
        "_id": { "$oid": "65a1f0c2e4b0a1b2c3d4e5f6" },
        "user": "rider",
        "date": "2025-02-01",
        "seq": "Sign In",
        "log": [
            { "at": "2025-02-01T08:07:31.000Z", "msg": "Started" },
            { "at": "2025-02-01T08:07:33.000Z", "msg": "Logged in" },
            { "at": "2025-02-01T08:07:35.000Z", "msg": "Sign In successful" }
        ],
        "status": "passed",
        "duration": 4000,
        "error": null,
        "at": "2025-02-01T08:07:35.000Z"
    }"#;

    #[test]
    fn test_decode_full_record() {
        let record: AttendanceRecord = serde_json::from_str(FULL_RECORD).unwrap();
        assert_eq!(record.user, "rider");
        assert_eq!(record.date, "2025-02-01");
        assert_eq!(record.seq, Seq::SignIn);
        assert_eq!(record.log.len(), 3);
        assert_eq!(record.log[1].msg, "Logged in");
        assert_eq!(record.status, "passed");
        assert_eq!(record.duration, Some(4000.0));
        assert!(record.error.is_none());
        assert_eq!(record.at, "2025-02-01T08:07:35.000Z");
    }

    #[test]
    fn test_decode_structured_id() {
        let record: AttendanceRecord = serde_json::from_str(FULL_RECORD).unwrap();
        assert_eq!(record.id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert!(matches!(record.id, RecordId::Oid { .. }));
    }

    #[test]
    fn test_decode_plain_string_id() {
        // Older feed entries carry the id as a bare string.
        let json = r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "user": "rider",
            "date": "2025-02-01",
            "seq": "Sign Out",
            "status": "passed",
            "at": "2025-02-01T18:45:02.000Z"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::Plain("65a1f0c2e4b0a1b2c3d4e5f6".to_string()));
        assert_eq!(record.id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_decode_defaults_for_absent_fields() {
        // log, duration, and error may all be missing entirely.
        let json = r#"{
            "_id": "65a1f0c2",
            "user": "rider",
            "date": "2025-02-01",
            "seq": "Sign In",
            "status": "",
            "at": "2025-02-01T08:07:35.000Z"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.log.is_empty());
        assert!(record.duration.is_none());
        assert!(record.error.is_none());
        assert_eq!(record.status, "");
    }

    #[test]
    fn test_decode_error_field() {
        let json = r#"{
            "_id": "65a1f0c2",
            "user": "rider",
            "date": "2025-02-01",
            "seq": "Sign Out",
            "status": "failed",
            "error": "Timed out waiting for portal",
            "at": "2025-02-01T18:45:02.000Z"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.error.as_deref(), Some("Timed out waiting for portal"));
        assert_eq!(record.status, "failed");
    }

    #[test]
    fn test_decode_rejects_unknown_seq() {
        let json = r#"{
            "_id": "65a1f0c2",
            "user": "rider",
            "date": "2025-02-01",
            "seq": "Lunch Break",
            "status": "passed",
            "at": "2025-02-01T12:00:00.000Z"
        }"#;

        assert!(serde_json::from_str::<AttendanceRecord>(json).is_err());
    }

    #[test]
    fn test_decode_record_array() {
        let json = format!("[{},{}]", FULL_RECORD, FULL_RECORD);
        let records: Vec<AttendanceRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_seq_wire_literals() {
        assert_eq!(serde_json::from_str::<Seq>(r#""Sign In""#).unwrap(), Seq::SignIn);
        assert_eq!(serde_json::from_str::<Seq>(r#""Sign Out""#).unwrap(), Seq::SignOut);
        assert_eq!(Seq::SignIn.as_str(), "Sign In");
        assert_eq!(Seq::SignOut.as_str(), "Sign Out");
    }

    #[test]
    fn test_fractional_duration() {
        let json = r#"{
            "_id": "65a1f0c2",
            "user": "rider",
            "date": "2025-02-01",
            "seq": "Sign In",
            "status": "passed",
            "duration": 4275.5,
            "at": "2025-02-01T08:07:35.000Z"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.duration, Some(4275.5));
    }
}
