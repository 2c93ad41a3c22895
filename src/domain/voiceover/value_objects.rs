//! Voiceover Context - Value Objects

use indexmap::IndexMap;

use super::{VoiceoverDict, VoiceoverError};

const BYTES_PER_MB: f64 = (1 << 20) as f64;

/// 配音 - 一段录制好的旁白音频的元数据
///
/// 不变量:
/// - filename 不可为空
/// - 相等性按值比较（三个字段全部相同）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voiceover {
    filename: String,
    file_size_bytes: u64,
    needs_update: bool,
}

impl Voiceover {
    pub fn new(
        filename: impl Into<String>,
        file_size_bytes: u64,
        needs_update: bool,
    ) -> Result<Self, VoiceoverError> {
        let filename = filename.into();
        if filename.is_empty() {
            return Err(VoiceoverError::InvalidVoiceover(
                "filename cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            filename,
            file_size_bytes,
            needs_update,
        })
    }

    /// 新录制的配音，默认不需要更新
    pub fn create_new(
        filename: impl Into<String>,
        file_size_bytes: u64,
    ) -> Result<Self, VoiceoverError> {
        Self::new(filename, file_size_bytes, false)
    }

    pub fn from_dict(dict: VoiceoverDict) -> Result<Self, VoiceoverError> {
        Self::new(dict.filename, dict.file_size_bytes, dict.needs_update)
    }

    pub fn to_dict(&self) -> VoiceoverDict {
        VoiceoverDict {
            filename: self.filename.clone(),
            file_size_bytes: self.file_size_bytes,
            needs_update: self.needs_update,
        }
    }

    pub fn toggle_needs_update(&mut self) {
        self.needs_update = !self.needs_update;
    }

    pub fn mark_as_needing_update(&mut self) {
        self.needs_update = true;
    }

    // Getters
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn file_size_bytes(&self) -> u64 {
        self.file_size_bytes
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// 文件大小（MB，1 MB = 2^20 字节）
    pub fn file_size_mb(&self) -> f64 {
        self.file_size_bytes as f64 / BYTES_PER_MB
    }
}

/// 某个 content id 下配音映射的实时视图
///
/// 持有聚合内部映射的可变借用，而不是副本：通过 `get_mut` / `iter_mut`
/// 修改的 needs_update 标记会直接反映到聚合中。
/// 视图不提供插入或删除，结构变更必须走 `RecordedVoiceovers` 的方法。
#[derive(Debug)]
pub struct BindableVoiceovers<'a> {
    voiceovers: &'a mut IndexMap<String, Voiceover>,
}

impl<'a> BindableVoiceovers<'a> {
    pub(crate) fn new(voiceovers: &'a mut IndexMap<String, Voiceover>) -> Self {
        Self { voiceovers }
    }

    pub fn get(&self, language_code: &str) -> Option<&Voiceover> {
        self.voiceovers.get(language_code)
    }

    pub fn get_mut(&mut self, language_code: &str) -> Option<&mut Voiceover> {
        self.voiceovers.get_mut(language_code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Voiceover)> {
        self.voiceovers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Voiceover)> {
        self.voiceovers.iter_mut()
    }

    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.voiceovers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.voiceovers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voiceovers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voiceover_creation() {
        let voiceover = Voiceover::create_new("filename1.mp3", 100000).unwrap();

        assert_eq!(voiceover.filename(), "filename1.mp3");
        assert_eq!(voiceover.file_size_bytes(), 100000);
        assert!(!voiceover.needs_update());
    }

    #[test]
    fn test_empty_filename_rejected() {
        let err = Voiceover::new("", 10, false).unwrap_err();
        assert!(matches!(err, VoiceoverError::InvalidVoiceover(_)));
    }

    #[test]
    fn test_toggle_is_a_flip() {
        let mut voiceover = Voiceover::new("a.mp3", 10, false).unwrap();
        let original = voiceover.clone();

        voiceover.toggle_needs_update();
        assert!(voiceover.needs_update());
        assert_eq!(voiceover.filename(), "a.mp3");
        assert_eq!(voiceover.file_size_bytes(), 10);

        voiceover.toggle_needs_update();
        assert_eq!(voiceover, original);
    }

    #[test]
    fn test_equality_by_value() {
        let a = Voiceover::new("a.mp3", 10, false).unwrap();
        let b = Voiceover::from_dict(a.to_dict()).unwrap();
        assert_eq!(a, b);

        let c = Voiceover::new("a.mp3", 10, true).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_file_size_mb() {
        let voiceover = Voiceover::new("a.mp3", 3 * 1024 * 1024 / 2, false).unwrap();
        assert_eq!(voiceover.file_size_mb(), 1.5);
    }

    #[test]
    fn test_bindable_view_has_no_structural_access() {
        let mut mapping = IndexMap::new();
        mapping.insert("en".to_string(), Voiceover::new("a.mp3", 1, false).unwrap());
        mapping.insert("hi".to_string(), Voiceover::new("b.mp3", 2, false).unwrap());

        {
            let mut view = BindableVoiceovers::new(&mut mapping);
            assert_eq!(view.len(), 2);
            assert_eq!(view.language_codes().collect::<Vec<_>>(), vec!["en", "hi"]);
            view.get_mut("hi").unwrap().mark_as_needing_update();
        }

        assert!(mapping["hi"].needs_update());
        assert!(!mapping["en"].needs_update());
    }
}
