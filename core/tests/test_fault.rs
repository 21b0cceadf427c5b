// Sticky fault: the first failure freezes the input stream and is the only
// cause ever reported.

#[cfg(test)]
mod tests {
    use bytestream_core::stream::StreamState;
    use bytestream_core::{to_bytes, InputStream, OutputStream, StreamError};

    fn short_wire() -> Vec<u8> {
        // One i32, then a string whose declared length overruns the buffer.
        let mut out = OutputStream::new();
        out.write(&7i32).write_len(50).write_raw(b"tail");
        out.into_vec()
    }

// ## 1. Fresh streams

    #[test]
    fn fresh_stream_is_ok() {
        let wire = to_bytes(&1u8);
        let input = InputStream::new(&wire);
        assert!(input.is_ok());
        assert_eq!(input.status(), Ok(()));
        assert!(input.fault().is_none());
        assert_eq!(input.state(), &StreamState::Ok);
    }

// ## 2. Stickiness

    #[test]
    fn reads_after_fault_are_inert() {
        let wire = short_wire();
        let mut n = 0i32;
        let mut s = String::from("untouched");
        let mut after = 99u8;

        let mut input = InputStream::new(&wire);
        input.read(&mut n).read(&mut s).read(&mut after);

        assert_eq!(n, 7);
        assert!(!input.is_ok());
        assert_eq!(after, 99);
        // Cursor stays just past the string's length field.
        assert_eq!(input.position(), 12);
        assert_eq!(input.remaining(), 4);
    }

    #[test]
    fn later_reads_that_would_fit_still_fail() {
        let wire = short_wire();
        let mut input = InputStream::new(&wire);
        input.decode::<i32>().unwrap();
        let first = input.decode::<String>().unwrap_err();

        // Four bytes remain, enough for a u32, but the stream is faulted.
        let again = input.decode::<u32>().unwrap_err();
        assert_eq!(again, first);
        assert_eq!(input.position(), 12);
        assert!(input.read_raw(1).is_err());
        assert_eq!(input.position(), 12);
    }

    #[test]
    fn first_cause_wins() {
        let wire = [2u8];
        let mut input = InputStream::new(&wire);
        let first = input.decode::<bool>().unwrap_err();
        assert!(matches!(first, StreamError::InvalidValue { type_name: "bool", .. }));

        let returned = input.fail_custom("later failure");
        assert_eq!(returned, first);
        assert_eq!(input.status(), Err(first.clone()));
        assert_eq!(input.fault(), Some(&first));
        assert_eq!(input.state(), &StreamState::Faulted(first));
    }

    #[test]
    fn consumed_bytes_stay_consumed_on_validation_failure() {
        let wire = [1u8, 5, 0];
        let mut input = InputStream::new(&wire);
        assert!(input.decode::<bool>().unwrap());
        assert!(input.decode::<bool>().is_err());
        assert_eq!(input.position(), 2);
    }

// ## 3. Fault classification

    #[test]
    fn read_faults_are_classified() {
        assert!(StreamError::InvalidRead { offset: 0, needed: 1, remaining: 0 }.is_read_fault());
        assert!(StreamError::InvalidUtf8 { offset: 0 }.is_read_fault());
        assert!(StreamError::LengthLimit { len: 2, limit: 1 }.is_read_fault());
        assert!(StreamError::Custom("x".into()).is_read_fault());
        assert!(!StreamError::TrailingBytes { remaining: 1 }.is_read_fault());
    }

    #[test]
    fn error_messages_name_the_offset() {
        let err = StreamError::InvalidRead { offset: 12, needed: 50, remaining: 4 };
        let msg = err.to_string();
        assert!(msg.contains("12"), "{msg}");
        assert!(msg.contains("50"), "{msg}");
    }

    #[test]
    fn trailing_bytes_never_fault_a_stream() {
        let wire = [1u8, 2];
        let mut input = InputStream::new(&wire);
        let err = StreamError::TrailingBytes { remaining: 2 };
        assert_eq!(input.fail(err.clone()), err);
        assert!(input.is_ok());
        assert_eq!(input.decode::<u8>().unwrap(), 1);
    }

// ## 4. Cloned streams

    #[test]
    fn clone_is_an_independent_cursor() {
        let wire = to_bytes(&(1u16, 2u16));
        let mut input = InputStream::new(&wire);
        input.decode::<u16>().unwrap();

        let mut peek = input.clone();
        assert_eq!(peek.decode::<u16>().unwrap(), 2);
        assert!(peek.decode::<u8>().is_err());

        assert!(input.is_ok());
        assert_eq!(input.decode::<u16>().unwrap(), 2);
    }
}
