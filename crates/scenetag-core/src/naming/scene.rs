use super::NameSynthesizer;
use crate::types::{ExtractedMetadata, ReleaseType, Resolution};

impl NameSynthesizer {
    /// Dot-separated scene filename, with group suffix and extension.
    ///
    /// ```text
    /// REMUX       Title.Year.SxxEyy.UHD.BluRay.2160p.Audio.HVEC.REMUX-Group.mkv
    /// WEB         Title.Year.SxxEyy.2160p.SERVICE.WEB-DL.Audio.HDR.H.265-Group.mkv
    /// ENCODE/DVD  Title.Year.SxxEyy.1080p.BluRay.Audio.HDR.x264-Group.mkv
    /// ```
    #[must_use]
    pub fn scene_name(&self, meta: &ExtractedMetadata) -> String {
        let mut tokens: Vec<String> = Vec::new();
        tokens.extend(Self::title(meta).map(|t| t.replace(' ', ".")));
        tokens.extend(meta.year.map(|y| y.to_string()));
        tokens.extend(meta.series_marker());

        let resolution = meta.resolution.map(|r| r.to_string());
        let source = meta.source.map(|s| s.to_string());
        let codec = self.codec(meta);

        match Self::template(meta) {
            ReleaseType::Remux => {
                if meta.resolution == Some(Resolution::UHD2160) {
                    tokens.push("UHD".to_string());
                }
                tokens.extend(source);
                tokens.extend(resolution);
                tokens.extend(meta.audio.clone());
                tokens.extend(codec);
                tokens.push("REMUX".to_string());
            }
            release_type @ (ReleaseType::WebDl | ReleaseType::WebRip) => {
                tokens.extend(resolution);
                tokens.extend(meta.service.clone());
                tokens.push(release_type.scene_label().to_string());
                tokens.extend(meta.audio.clone());
                tokens.extend(meta.hdr_info.iter().cloned());
                tokens.extend(codec);
            }
            ReleaseType::Encode | ReleaseType::DvdRip => {
                tokens.extend(resolution);
                tokens.extend(source);
                tokens.extend(meta.audio.clone());
                tokens.extend(meta.hdr_info.iter().cloned());
                tokens.extend(codec);
            }
        }

        let joined = tokens
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        let stem = self.tidy_dotted(&joined);

        format!(
            "{stem}{}.{}",
            self.group_suffix(meta),
            self.config.output_extension
        )
    }

    /// Whitespace runs become dots, dot runs collapse, edge dots go.
    pub(super) fn tidy_dotted(&self, name: &str) -> String {
        let dotted = self.re_whitespace.replace_all(name, ".");
        self.re_dots
            .replace_all(&dotted, ".")
            .trim_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::NamingConfig;
    use crate::naming::NameSynthesizer;
    use crate::types::{MetadataBuilder, ReleaseType, Resolution, Source};

    fn synthesizer() -> NameSynthesizer {
        NameSynthesizer::new(&NamingConfig::default()).unwrap()
    }

    #[test]
    fn encode_template() {
        let meta = MetadataBuilder::new("Black.Dog.2024.1080p.BluRay.DD5.1.x264-iSlaNd", "NoGroup")
            .resolution(Some(Resolution::FHD1080))
            .video(Some("AVC".into()), Some("x264".into()), Some("x264".into()))
            .classification(Some(Source::BluRay), Some(ReleaseType::Encode))
            .audio(Some("DD5.1".into()), vec![])
            .release_group("iSlaNd")
            .title(Some("Black Dog".into()), Some(2024))
            .build();
        assert_eq!(
            synthesizer().scene_name(&meta),
            "Black.Dog.2024.1080p.BluRay.DD5.1.x264-iSlaNd.mkv"
        );
    }

    #[test]
    fn remux_template() {
        let meta = MetadataBuilder::new("Black Dog 2024 REMUX", "NoGroup")
            .resolution(Some(Resolution::UHD2160))
            .video(Some("HEVC".into()), Some("HEVC".into()), None)
            .classification(Some(Source::BluRay), Some(ReleaseType::Remux))
            .audio(Some("TrueHD.Atmos.7.1".into()), vec![])
            .release_group("iSlaNd")
            .title(Some("Black Dog".into()), Some(2024))
            .build();
        assert_eq!(
            synthesizer().scene_name(&meta),
            "Black.Dog.2024.UHD.BluRay.2160p.TrueHD.Atmos.7.1.HVEC.REMUX-iSlaNd.mkv"
        );
    }

    #[test]
    fn web_template_with_service() {
        let meta = MetadataBuilder::new("Hedda", "NoGroup")
            .resolution(Some(Resolution::UHD2160))
            .video(Some("HEVC".into()), Some("H.265".into()), None)
            .classification(Some(Source::Web), Some(ReleaseType::WebDl))
            .audio(Some("DDP5.1.Atmos".into()), vec![])
            .hdr(vec!["DV".into(), "HDR".into()])
            .service(Some("AMZN".into()))
            .release_group("FHC")
            .title(Some("Hedda".into()), Some(2025))
            .build();
        assert_eq!(
            synthesizer().scene_name(&meta),
            "Hedda.2025.2160p.AMZN.WEB-DL.DDP5.1.Atmos.DV.HDR.H.265-FHC.mkv"
        );
    }

    #[test]
    fn sentinel_group_is_omitted() {
        let meta = MetadataBuilder::new("Movie.Without.Tag", "NoGroup")
            .title(Some("Movie".into()), None)
            .build();
        assert_eq!(synthesizer().scene_name(&meta), "Movie.mkv");
    }

    #[test]
    fn no_empty_segments_and_stable_output() {
        let meta = MetadataBuilder::new("x", "NoGroup")
            .resolution(Some(Resolution::FHD1080))
            .classification(Some(Source::BluRay), Some(ReleaseType::Encode))
            .audio(Some(" ".into()), vec![])
            .title(Some(" Mr.  Robot ".into()), None)
            .build();
        let s = synthesizer();
        let name = s.scene_name(&meta);
        assert_eq!(name, "Mr.Robot.1080p.BluRay.mkv");
        assert!(!name.contains(".."));
        assert_eq!(s.scene_name(&meta), name);
        assert_eq!(s.tidy_dotted(&s.tidy_dotted(" a..b  c. ")), s.tidy_dotted(" a..b  c. "));
    }

    #[test]
    fn custom_extension() {
        let config = NamingConfig::new().with_output_extension(".mp4");
        let s = NameSynthesizer::new(&config).unwrap();
        let meta = MetadataBuilder::new("Film", "NoGroup")
            .title(Some("Film".into()), Some(1999))
            .build();
        assert_eq!(s.scene_name(&meta), "Film.1999.mp4");
    }

    #[test]
    fn titles_never_carry_path_separators() {
        let meta = MetadataBuilder::new("Face.Off.1997.1080p.BluRay.x264-GRP", "NoGroup")
            .resolution(Some(Resolution::FHD1080))
            .classification(Some(Source::BluRay), Some(ReleaseType::Encode))
            .release_group("GRP")
            .title(Some("Face/Off".into()), Some(1997))
            .build();
        let name = synthesizer().scene_name(&meta);
        assert_eq!(name, "Face.Off.1997.1080p.BluRay-GRP.mkv");
        assert!(!name.contains('/'));
    }

    #[test]
    fn deserialized_extension_with_leading_dot() {
        let config: NamingConfig = serde_json::from_str(r#"{"output_extension": ".mkv"}"#).unwrap();
        let s = NameSynthesizer::new(&config).unwrap();
        let meta = MetadataBuilder::new("Film", "NoGroup")
            .release_group("iSlaNd")
            .title(Some("Film".into()), Some(1999))
            .build();
        let name = s.scene_name(&meta);
        assert_eq!(name, "Film.1999-iSlaNd.mkv");
        assert!(!name.contains(".."));
    }
}
