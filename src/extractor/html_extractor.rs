//! HTML标签提取器
//! 负责从HTML中提取script-src、样式表href、meta标签、标题与generator标记
//! 基于流式Tokenizer，属性顺序无关，畸形HTML不报错

use std::cell::{Cell, RefCell};

use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use markup5ever::interface::Attribute;
use tendril::StrTendril;

/// 单次提取得到的页面特征视图
#[derive(Debug, Clone, Default)]
pub struct PageFeatures {
    pub script_srcs: Vec<String>,
    pub stylesheet_hrefs: Vec<String>,
    // (name|property小写, content)
    pub meta_tags: Vec<(String, String)>,
    pub title: Option<String>,
    pub generator: Option<String>,
}

impl PageFeatures {
    /// 按名称查找meta内容（名称已统一小写）
    pub fn meta_content(&self, name: &str) -> Option<&str> {
        let lowered = name.to_lowercase();
        self.meta_tags
            .iter()
            .find(|(n, _)| *n == lowered)
            .map(|(_, c)| c.as_str())
    }
}

/// 流式HTML提取器
#[derive(Debug, Default, Clone)]
pub struct HtmlExtractor {
    script_srcs: RefCell<Vec<String>>,
    stylesheet_hrefs: RefCell<Vec<String>>,
    meta_tags: RefCell<Vec<(String, String)>>,
    title: RefCell<Option<String>>,
    in_title: Cell<bool>,
    title_buf: RefCell<String>,
}

impl TokenSink for HtmlExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(Tag {
                kind: TagKind::StartTag,
                name,
                attrs,
                ..
            }) => match name.as_ref() {
                "script" => self.extract_script_src(&attrs),
                "link" => self.extract_stylesheet_href(&attrs),
                "meta" => self.extract_meta_tags(&attrs),
                "title" => self.in_title.set(true),
                _ => {}
            },
            Token::TagToken(Tag {
                kind: TagKind::EndTag,
                name,
                ..
            }) => {
                if name.as_ref() == "title" && self.in_title.get() {
                    self.in_title.set(false);
                    let text = self.title_buf.borrow().trim().to_string();
                    // 只保留首个<title>
                    if !text.is_empty() && self.title.borrow().is_none() {
                        *self.title.borrow_mut() = Some(text);
                    }
                    self.title_buf.borrow_mut().clear();
                }
            }
            Token::CharacterTokens(text) => {
                if self.in_title.get() {
                    self.title_buf.borrow_mut().push_str(&text);
                }
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl HtmlExtractor {
    /// 创建新的提取器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从HTML字符串提取特征视图
    pub fn extract(&self, html: &str) -> PageFeatures {
        let tokenizer = Tokenizer::new(self.clone(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        tokenizer.sink.into_features()
    }

    /// 提取script-src
    fn extract_script_src(&self, attrs: &[Attribute]) {
        for attr in attrs {
            if attr.name.local.as_ref() == "src" {
                self.script_srcs.borrow_mut().push(attr.value.to_string());
                break;
            }
        }
    }

    /// 提取样式表href（rel=stylesheet，属性顺序无关）
    fn extract_stylesheet_href(&self, attrs: &[Attribute]) {
        let mut rel_stylesheet = false;
        let mut href = None;

        for attr in attrs {
            match attr.name.local.as_ref() {
                "rel" => {
                    if attr.value.to_lowercase().split_whitespace().any(|v| v == "stylesheet") {
                        rel_stylesheet = true;
                    }
                }
                "href" => href = Some(attr.value.to_string()),
                _ => {}
            }
        }

        if rel_stylesheet {
            if let Some(h) = href {
                self.stylesheet_hrefs.borrow_mut().push(h);
            }
        }
    }

    /// 提取meta标签（name或property均接受，键统一小写）
    fn extract_meta_tags(&self, attrs: &[Attribute]) {
        let mut name = None;
        let mut content = None;

        for attr in attrs {
            match attr.name.local.as_ref() {
                "name" | "property" => name = Some(attr.value.to_string().to_lowercase()),
                "content" => content = Some(attr.value.to_string()),
                _ => {}
            }
        }

        if let (Some(n), Some(c)) = (name, content) {
            self.meta_tags.borrow_mut().push((n, c));
        }
    }

    /// 消费提取器，产出特征视图
    fn into_features(self) -> PageFeatures {
        let meta_tags = self.meta_tags.into_inner();
        let generator = meta_tags
            .iter()
            .find(|(n, _)| n == "generator")
            .map(|(_, c)| c.clone());

        PageFeatures {
            script_srcs: self.script_srcs.into_inner(),
            stylesheet_hrefs: self.stylesheet_hrefs.into_inner(),
            meta_tags,
            title: self.title.into_inner(),
            generator,
        }
    }
}

/// 便捷入口：一次性提取页面特征
pub fn extract_features(html: &str) -> PageFeatures {
    HtmlExtractor::new().extract(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_extractor() {
        let html = r#"
            <title>Mi Tienda Online</title>
            <script src="/jquery.min.js"></script>
            <link rel="stylesheet" href="/theme/style.css">
            <link href="/print.css" rel="stylesheet">
            <meta name="author" content="test_user">
            <meta name="generator" content="WordPress 6.4" />
            <script src="/vue.global.js"></script>
        "#;

        let features = extract_features(html);

        assert_eq!(
            features.script_srcs,
            vec!["/jquery.min.js".to_string(), "/vue.global.js".to_string()]
        );
        // 属性顺序无关
        assert_eq!(
            features.stylesheet_hrefs,
            vec!["/theme/style.css".to_string(), "/print.css".to_string()]
        );
        assert_eq!(features.title.as_deref(), Some("Mi Tienda Online"));
        assert_eq!(features.generator.as_deref(), Some("WordPress 6.4"));
        assert_eq!(features.meta_content("author"), Some("test_user"));
    }

    #[test]
    fn test_extractor_property_meta_and_missing_signals() {
        let html = r#"<meta property="og:site_name" content="Tienda X"><link rel="preload" href="/x.css">"#;
        let features = extract_features(html);

        assert_eq!(features.meta_content("og:site_name"), Some("Tienda X"));
        // rel非stylesheet不计入
        assert!(features.stylesheet_hrefs.is_empty());
        assert!(features.title.is_none());
        assert!(features.generator.is_none());
    }

    #[test]
    fn test_extractor_empty_and_malformed_input() {
        assert!(extract_features("").script_srcs.is_empty());

        // 畸形HTML不报错，尽力提取
        let features = extract_features("<script src='/a.js'><meta name=generator content=Joomla");
        assert_eq!(features.script_srcs, vec!["/a.js".to_string()]);
    }
}
