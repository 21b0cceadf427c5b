// End-to-end sequences mixing every codec, read back in writing order.

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};

    use bytestream_core::prelude::*;
    use bytestream_core::{from_bytes, to_bytes};

// ## 1. Wire-exact scenario

    #[test]
    fn int_text_vector_is_35_bytes() {
        let mut out = OutputStream::new();
        out.write(&11i32).write("abc").write(&vec![10i32, 3000, 400]);

        let mut expected = Vec::new();
        expected.extend_from_slice(&[0x0B, 0, 0, 0]);
        expected.extend_from_slice(&[3, 0, 0, 0, 0, 0, 0, 0]);
        expected.extend_from_slice(b"abc");
        expected.extend_from_slice(&[3, 0, 0, 0, 0, 0, 0, 0]);
        expected.extend_from_slice(&[0x0A, 0, 0, 0]);
        expected.extend_from_slice(&[0xB8, 0x0B, 0, 0]);
        expected.extend_from_slice(&[0x90, 0x01, 0, 0]);

        assert_eq!(out.len(), 35);
        assert_eq!(out.as_bytes(), expected.as_slice());

        let mut n = 0i32;
        let mut s = String::new();
        let mut v = Vec::<i32>::new();
        let mut input = InputStream::new(out.as_bytes());
        input.read(&mut n).read(&mut s).read(&mut v);

        assert!(input.is_ok());
        assert!(input.is_at_end());
        assert_eq!((n, s.as_str(), v), (11, "abc", vec![10, 3000, 400]));
    }

    #[test]
    fn nested_map_of_maps() {
        let inner = BTreeMap::from([(100i32, "aa".to_string()), (200, "bb".into())]);
        let value: HashMap<i32, BTreeMap<i32, String>> = HashMap::from([(11, inner)]);

        let wire = to_bytes(&value);
        // outer count, key, inner count, two (key, len, 2 bytes) entries
        assert_eq!(wire.len(), 8 + 4 + 8 + 2 * (4 + 8 + 2));

        let mut input = InputStream::new(&wire);
        let got = input.decode::<HashMap<i32, BTreeMap<i32, String>>>().unwrap();
        assert!(input.is_at_end());
        assert_eq!(got[&11][&100], "aa");
        assert_eq!(got[&11][&200], "bb");
    }

// ## 2. Mixed sequence

    #[test]
    fn every_kind_in_one_stream() {
        let pair = (444i32, (33i32, 44.8f32, true));
        let text = String::from("string");
        let list: LinkedList<String> = ["s1", "s2"].iter().map(|s| s.to_string()).collect();
        let deque: VecDeque<u64> = VecDeque::from(vec![1, 2, 3]);
        let sets: Vec<BTreeSet<String>> = vec![
            ["1.111", "1.222"].iter().map(|s| s.to_string()).collect(),
            ["2.111", "2.222"].iter().map(|s| s.to_string()).collect(),
        ];
        let map = BTreeMap::from([(1i32, 44.55f64), (2, -1.0)]);

        let mut out = OutputStream::new();
        out.write(&11i32)
            .write(&555_333i32)
            .write(&pair)
            .write(&text)
            .write(&list)
            .write(&deque)
            .write(&sets)
            .write(&map)
            .write(&'z');

        let mut a = 0i32;
        let mut b = 0i32;
        let mut got_pair = (0i32, (0i32, 0f32, false));
        let mut got_text = String::new();
        let mut got_list = LinkedList::new();
        let mut got_deque = VecDeque::new();
        let mut got_sets: Vec<BTreeSet<String>> = Vec::new();
        let mut got_map = BTreeMap::new();
        let mut got_char = ' ';

        let mut input = InputStream::new(out.as_bytes());
        input
            .read(&mut a)
            .read(&mut b)
            .read(&mut got_pair)
            .read(&mut got_text)
            .read(&mut got_list)
            .read(&mut got_deque)
            .read(&mut got_sets)
            .read(&mut got_map)
            .read(&mut got_char);

        assert_eq!(input.status(), Ok(()));
        assert!(input.is_at_end());
        assert_eq!((a, b), (11, 555_333));
        assert_eq!(got_pair, pair);
        assert_eq!(got_text, text);
        assert_eq!(got_list, list);
        assert_eq!(got_deque, deque);
        assert_eq!(got_sets, sets);
        assert_eq!(got_map, map);
        assert_eq!(got_char, 'z');
    }

    #[test]
    fn reading_wrong_types_is_detected_when_lengths_disagree() {
        // Written as (u8, String); read as (String, u8): the first byte plus
        // seven of the length become a huge declared length.
        let wire = to_bytes(&(1u8, String::from("hi")));
        let mut input = InputStream::new(&wire);
        assert!(matches!(
            input.decode::<(String, u8)>(),
            Err(StreamError::InvalidRead { .. })
        ));
    }

// ## 3. One-shot helpers

    #[test]
    fn from_bytes_rejects_trailing_bytes() {
        let mut wire = to_bytes(&5u32);
        wire.push(0);
        assert_eq!(
            from_bytes::<u32>(&wire),
            Err(StreamError::TrailingBytes { remaining: 1 })
        );
    }

    #[test]
    fn outputs_can_be_reused_after_clear() {
        let mut out = OutputStream::with_capacity(64);
        out.write(&vec![1u8, 2, 3]);
        assert!(!out.is_empty());
        out.clear();
        assert!(out.is_empty());
        out.write(&1u8);
        assert_eq!(out.as_ref(), &[1]);
    }
}
