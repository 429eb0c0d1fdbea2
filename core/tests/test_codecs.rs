#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use proptest::prelude::*;

    use codec_core::compression::codecs::{
        Bzip2Codec, DeflateCodec, NullCodec, SnappyCodec, XzCodec, ZstdCodec,
    };
    use codec_core::compression::{codec_names, BuiltinFactory, Codec, CodecConfig, CodecFactory};

    fn builtin_codecs() -> Vec<Box<dyn Codec>> {
        CodecConfig::defaults()
            .map(|config| BuiltinFactory::new(config).create_instance())
            .collect()
    }

    // Low levels keep the property tests fast.
    fn fast_codecs() -> Vec<Box<dyn Codec>> {
        vec![
            Box::new(NullCodec::new()),
            Box::new(DeflateCodec::with_level(1)),
            Box::new(SnappyCodec::new()),
            Box::new(Bzip2Codec::with_level(1)),
            Box::new(XzCodec::with_level(0)),
            Box::new(ZstdCodec::new(1)),
        ]
    }

    fn sample(len: usize) -> Vec<u8> {
        b"block payload, record 0123456789; "
            .iter()
            .cycle()
            .take(len)
            .enumerate()
            .map(|(i, b)| if i % 97 == 0 { (i % 251) as u8 } else { *b })
            .collect()
    }

    #[test]
    fn test_roundtrip_all_builtins() {
        for mut codec in builtin_codecs() {
            for len in [0usize, 1, 17, 4096, 200_000] {
                let data = sample(len);
                let compressed = codec.compress(&data).unwrap();
                let restored = codec.decompress(&compressed).unwrap();
                assert_eq!(&restored[..], &data[..], "codec {} len {}", codec, len);
            }
        }
    }

    #[test]
    fn test_compress_empty_roundtrips() {
        for mut codec in builtin_codecs() {
            let compressed = codec.compress(&[]).unwrap();
            let restored = codec.decompress(&compressed).unwrap();
            assert!(restored.is_empty(), "codec {}", codec);
        }
    }

    #[test]
    fn test_sequential_calls_are_independent() {
        let a = sample(10_000);
        let b = b"a much shorter second block".to_vec();

        for mut codec in builtin_codecs() {
            let ca = codec.compress(&a).unwrap();
            let cb = codec.compress(&b).unwrap();

            // Earlier output survives later calls on the same instance.
            assert_eq!(&codec.decompress(&ca).unwrap()[..], &a[..], "codec {}", codec);
            assert_eq!(&codec.decompress(&cb).unwrap()[..], &b[..], "codec {}", codec);

            let ca_again = codec.compress(&a).unwrap();
            let restored = codec.decompress(&ca_again).unwrap();
            assert_eq!(&restored[..], &a[..], "codec {}", codec);
        }
    }

    #[test]
    fn test_compressible_input_shrinks() {
        let data = vec![b'a'; 64 * 1024];
        for mut codec in builtin_codecs() {
            let compressed = codec.compress(&data).unwrap();
            if codec.name() == codec_names::NULL {
                assert_eq!(compressed.len(), data.len());
            } else {
                assert!(compressed.len() < data.len() / 10, "codec {}", codec);
            }
        }
    }

    #[test]
    fn test_streaming_buffer_is_lazy_and_reused() {
        let mut codec = DeflateCodec::with_level(6);
        assert!(!codec.buffer().is_initialized());

        let big = sample(100_000);
        let compressed = codec.compress(&big).unwrap();
        assert!(codec.buffer().is_initialized());
        codec.decompress(&compressed).unwrap();
        let capacity = codec.buffer().capacity();
        assert!(capacity >= big.len());

        let small = codec.compress(b"tiny").unwrap();
        assert_eq!(&codec.decompress(&small).unwrap()[..], b"tiny");
        assert_eq!(codec.buffer().capacity(), capacity);
    }

    #[test]
    fn test_deflate_is_raw_rfc1951() {
        let data = sample(5_000);
        let mut codec = DeflateCodec::with_level(6);
        let compressed = codec.compress(&data).unwrap();

        // Plain RFC1951 decoder reads it; no zlib header to skip.
        let mut decoded = Vec::new();
        flate2::read::DeflateDecoder::new(&compressed[..])
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, data);

        // And blocks from a foreign raw deflate writer decode too.
        let mut encoder = flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::best());
        encoder.write_all(&data).unwrap();
        let foreign = encoder.finish().unwrap();
        assert_eq!(&codec.decompress(&foreign).unwrap()[..], &data[..]);
    }

    #[test]
    fn test_zlib_wrapped_input_is_rejected_by_deflate() {
        let data = sample(5_000);
        let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&data).unwrap();
        let zlib = encoder.finish().unwrap();

        let mut codec = DeflateCodec::with_level(6);
        match codec.decompress(&zlib) {
            Err(e) => assert!(e.is_corrupt_payload()),
            Ok(out) => assert_ne!(&out[..], &data[..]),
        }
    }

    #[test]
    fn test_snappy_trailer_is_crc32_be() {
        let data = sample(3_000);
        let mut codec = SnappyCodec::new();
        let compressed = codec.compress(&data).unwrap();

        let trailer = &compressed[compressed.len() - 4..];
        assert_eq!(trailer, &crc32fast::hash(&data).to_be_bytes()[..]);

        let body = &compressed[..compressed.len() - 4];
        let raw = snap::raw::Decoder::new().decompress_vec(body).unwrap();
        assert_eq!(raw, data);
    }

    #[test]
    fn test_snappy_checksum_mismatch_is_corrupt() {
        let mut codec = SnappyCodec::new();
        let mut compressed = codec.compress(&sample(1_000)).unwrap().to_vec();
        let last = compressed.len() - 1;
        compressed[last] ^= 0xFF;

        let err = codec.decompress(&compressed).unwrap_err();
        assert!(err.is_corrupt_payload());
        assert!(err.to_string().contains("checksum mismatch"));
    }

    #[test]
    fn test_snappy_rejects_block_shorter_than_trailer() {
        let mut codec = SnappyCodec::new();
        let err = codec.decompress(&[0x00, 0x01]).unwrap_err();
        assert!(err.is_corrupt_payload());
    }

    #[test]
    fn test_native_framing_magic() {
        let data = sample(2_000);

        let bz = Bzip2Codec::with_level(9).compress(&data).unwrap();
        assert_eq!(&bz[..3], b"BZh");

        let xz = XzCodec::with_level(6).compress(&data).unwrap();
        assert_eq!(&xz[..6], &[0xFD, b'7', b'z', b'X', b'Z', 0x00]);

        let zst = ZstdCodec::new(1).compress(&data).unwrap();
        assert_eq!(&zst[..4], &[0x28, 0xB5, 0x2F, 0xFD]);
    }

    #[test]
    fn test_zstd_decodes_frames_without_content_size() {
        let data = sample(50_000);
        let mut encoder = zstd::stream::Encoder::new(Vec::new(), 3).unwrap();
        encoder.write_all(&data).unwrap();
        let frame = encoder.finish().unwrap();

        let mut codec = ZstdCodec::new(1);
        assert_eq!(&codec.decompress(&frame).unwrap()[..], &data[..]);
    }

    #[test]
    fn test_truncated_payload_is_corrupt() {
        let data = sample(20_000);
        let mut codecs: Vec<Box<dyn Codec>> = builtin_codecs()
            .into_iter()
            .filter(|c| c.name() != codec_names::NULL)
            .collect();

        for codec in codecs.iter_mut() {
            let compressed = codec.compress(&data).unwrap();
            let truncated = &compressed[..compressed.len() / 2];
            let err = codec.decompress(truncated).unwrap_err();
            assert!(err.is_corrupt_payload(), "codec {}: {}", codec, err);
        }
    }

    #[test]
    fn test_garbage_payload_is_corrupt() {
        let garbage = [0xFFu8; 32];
        let mut codecs: Vec<Box<dyn Codec>> = vec![
            Box::new(DeflateCodec::with_level(6)),
            Box::new(Bzip2Codec::with_level(9)),
            Box::new(XzCodec::with_level(6)),
            Box::new(ZstdCodec::new(1)),
        ];
        for codec in codecs.iter_mut() {
            let err = codec.decompress(&garbage).unwrap_err();
            assert!(err.is_corrupt_payload(), "codec {}: {}", codec, err);
            assert!(err.to_string().contains(codec.name()));
        }
    }

    #[test]
    fn test_trailing_bytes_after_stream_are_corrupt() {
        let data = sample(900);
        for mut codec in builtin_codecs() {
            if codec.name() == codec_names::NULL {
                continue;
            }
            let mut padded = codec.compress(&data).unwrap().to_vec();
            padded.extend_from_slice(&[0xAB; 7]);
            let err = codec.decompress(&padded).unwrap_err();
            assert!(err.is_corrupt_payload(), "codec {}: {}", codec, err);
        }
    }

    #[test]
    fn test_snappy_rejects_oversized_declared_length() {
        // Varint header claiming 1 GiB, followed by a trailer.
        let block = [0x80, 0x80, 0x80, 0x80, 0x04, 0x00, 0x00, 0x00, 0x00];
        let mut codec = SnappyCodec::new();
        let err = codec.decompress(&block).unwrap_err();
        assert!(err.is_corrupt_payload());
        assert!(err.to_string().contains("declared length"));
    }

    #[test]
    fn test_instance_recovers_after_corrupt_block() {
        let data = sample(8_000);
        for mut codec in builtin_codecs() {
            if codec.name() == codec_names::NULL {
                continue;
            }
            let compressed = codec.compress(&data).unwrap();
            assert!(codec.decompress(&compressed[..compressed.len() / 3]).is_err());
            // The next block on the same instance is unaffected.
            assert_eq!(&codec.decompress(&compressed).unwrap()[..], &data[..], "codec {}", codec);
        }
    }

    #[test]
    fn test_null_is_identity() {
        let mut codec = NullCodec::new();
        let data = sample(123);
        assert_eq!(&codec.compress(&data).unwrap()[..], &data[..]);
        assert_eq!(&codec.decompress(&data).unwrap()[..], &data[..]);
        assert!(codec.decompress(&[]).unwrap().is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_roundtrip_every_codec(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
            for mut codec in fast_codecs() {
                let compressed = codec.compress(&data).unwrap();
                let restored = codec.decompress(&compressed).unwrap();
                prop_assert_eq!(&restored[..], &data[..]);
            }
        }

        #[test]
        fn prop_reused_instance_matches_fresh(
            first in proptest::collection::vec(any::<u8>(), 0..2048),
            second in proptest::collection::vec(any::<u8>(), 0..2048),
        ) {
            for mut codec in fast_codecs() {
                let _ = codec.compress(&first).unwrap();
                let compressed = codec.compress(&second).unwrap();
                let restored = codec.decompress(&compressed).unwrap();
                prop_assert_eq!(&restored[..], &second[..]);
            }
        }
    }
}
