mod common;

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use proptest::prelude::*;
    use zproc_core::constants::status_codes::Z_DATA_ERROR;
    use zproc_core::constants::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
    use zproc_core::prelude::*;

    use crate::common::{noise, pattern, prose};

    /// Hands out at most `step` bytes per read.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn codec_roundtrip_with_reuse() {
        let mut c = ZlibCompressor::new(ProcessorConfig::with_level(Level::Best)).unwrap();
        let mut d = ZlibDecompressor::new(ProcessorConfig::default()).unwrap();

        for data in [prose(1000), noise(70000, 2), pattern(64), Vec::new()] {
            let mut compressed = Vec::new();
            c.compress_chunk(&data, &mut compressed).unwrap();
            let mut out = Vec::new();
            d.decompress_chunk(&compressed, &mut out).unwrap();
            assert_eq!(out, data);
        }
        assert_eq!(c.processor().counters().chunks, 4);
        assert_eq!(d.processor().counters().chunks, 4);
    }

    #[test]
    fn codecs_append_to_output() {
        let mut c = ZlibCompressor::new(ProcessorConfig::default()).unwrap();
        let mut out = b"head".to_vec();
        c.compress_chunk(b"body", &mut out).unwrap();
        assert_eq!(&out[..4], b"head");
        assert_eq!(decompress(&out[4..]).unwrap(), b"body");
    }

    #[test]
    fn trailing_input_is_rejected() {
        let mut compressed = compress(&prose(500), Level::Default).unwrap();
        let stream_len = compressed.len();
        compressed.extend_from_slice(b"junk");

        let mut d = ZlibDecompressor::new(ProcessorConfig::default()).unwrap();
        let mut out = Vec::new();
        match d.decompress_chunk(&compressed, &mut out) {
            Err(CompressionError::TrailingInput { consumed, total }) => {
                assert_eq!(consumed, stream_len);
                assert_eq!(total, stream_len + 4);
            }
            other => panic!("expected trailing input error, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn decompressor_recovers_after_garbage() {
        let mut d = ZlibDecompressor::new(ProcessorConfig::default()).unwrap();
        let mut out = Vec::new();

        let err = d.decompress_chunk(&[0xFF; 32], &mut out).unwrap_err();
        assert_eq!(err.processor_error().and_then(|e| e.code()), Some(Z_DATA_ERROR));
        assert!(out.is_empty());

        let data = noise(3000, 8);
        d.decompress_chunk(&compress(&data, Level::Fastest).unwrap(), &mut out).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn one_shot_helpers() {
        let data = prose(12345);
        let compressed = compress(&data, Level::Default).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed).unwrap(), data);
        assert!(matches!(
            compress(&data, Level::Custom(42)),
            Err(CompressionError::Processor(ProcessorError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn stream_blocks_decode_independently() {
        let data = prose(10000);
        let reader = Trickle { data: data.clone(), pos: 0, step: 7 };
        let c = ZlibCompressor::new(ProcessorConfig::default()).unwrap();

        let blocks: Vec<Vec<u8>> = compress_stream(reader, 4096, c)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(blocks.len(), 3);

        let mut restored = Vec::new();
        for (i, block) in blocks.iter().enumerate() {
            let plain = decompress(block).unwrap();
            let expected = if i < 2 { 4096 } else { 10000 - 2 * 4096 };
            assert_eq!(plain.len(), expected);
            restored.extend(plain);
        }
        assert_eq!(restored, data);
    }

    #[test]
    fn stream_of_empty_reader_yields_nothing() {
        let c = ZlibCompressor::new(ProcessorConfig::default()).unwrap();
        let mut blocks = compress_stream(io::empty(), DEFAULT_CHUNK_SIZE, c).unwrap();
        assert!(blocks.next().is_none());
    }

    #[test]
    fn stream_rejects_bad_chunk_size() {
        for size in [0, MAX_CHUNK_SIZE + 1] {
            let c = ZlibCompressor::new(ProcessorConfig::default()).unwrap();
            assert!(matches!(
                compress_stream(io::empty(), size, c),
                Err(CompressionError::InvalidChunkSize { .. })
            ));
        }
    }

    #[test]
    fn stream_stops_after_read_error() {
        let c = ZlibCompressor::new(ProcessorConfig::default()).unwrap();
        let mut blocks = compress_stream(Broken, 1024, c).unwrap();
        assert!(matches!(blocks.next(), Some(Err(CompressionError::Io(_)))));
        assert!(blocks.next().is_none());
    }

    proptest! {
        #[test]
        fn prop_roundtrip_any_level(data in proptest::collection::vec(any::<u8>(), 0..4096), level in 0u32..=9) {
            let compressed = compress(&data, Level::Custom(level)).unwrap();
            prop_assert_eq!(decompress(&compressed).unwrap(), data);
        }

        #[test]
        fn prop_consumed_stops_at_stream_end(
            data in proptest::collection::vec(any::<u8>(), 0..2048),
            suffix in proptest::collection::vec(any::<u8>(), 1..64),
        ) {
            let compressed = compress(&data, Level::Default).unwrap();
            let mut joined = compressed.clone();
            joined.extend_from_slice(&suffix);

            let mut p = Processor::decompressor(ProcessorConfig::default()).unwrap();
            let mut out = Vec::new();
            let consumed = p.process_chunk(&joined, &mut out).unwrap();
            prop_assert_eq!(consumed, compressed.len());
            prop_assert_eq!(out, data);
        }
    }
}
