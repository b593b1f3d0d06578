//! Homepage feature records and the built-in feature sets.

use serde::Serialize;

use gcsite_config::FeatureSet;

/// Path of an image asset, resolved against the base URL when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trusted HTML fragment, inserted into the page without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One homepage feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    /// Card heading (escaped when rendered)
    pub title: String,
    /// Card illustration
    pub icon: IconRef,
    /// Card body
    pub description: Markup,
}

impl FeatureRecord {
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            icon: IconRef::new(icon),
            description: Markup::trusted(description),
        }
    }
}

/// Ordered feature records. Cards are identified by position only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureList {
    records: Vec<FeatureRecord>,
}

impl FeatureList {
    pub fn new(records: Vec<FeatureRecord>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// What the garbage collector is and why it matters.
    pub fn gc_overview() -> Self {
        Self::new(vec![
            FeatureRecord::new(
                "What is Garbage Collector",
                "img/dotnet_bot_presenting.svg",
                ".NET's garbage collector manages the allocation and release of memory for your \
                 application. Each time you create a new object, the common language runtime \
                 allocates memory for the object from the managed heap.",
            ),
            FeatureRecord::new(
                "Why is important",
                "img/my-dotnet-bot-mod.svg",
                "Memory is not infinite. Eventually the garbage collector must perform a \
                 collection in order to free some memory.",
            ),
            FeatureRecord::new(
                "Performance",
                "img/dotnet-bot_builder.svg",
                "Is important to know about Garbage collector this helps you to build better \
                 programs and understand how you can avoid Memory leaks and build more efficient \
                 applications",
            ),
        ])
    }

    /// What a reader will learn across the docs.
    ///
    /// Placeholder copy. The published homepage only ships the overview cards,
    /// so replace this text before selecting the set for production.
    pub fn learning_path() -> Self {
        Self::new(vec![
            FeatureRecord::new(
                "How memory is organized",
                "img/dotnet_bot_presenting.svg",
                "Learn how the operating system hands memory to a .NET process and how the \
                 runtime divides it between the managed heap, the stack and native allocations.",
            ),
            FeatureRecord::new(
                "How the GC collects",
                "img/my-dotnet-bot-mod.svg",
                "Follow the garbage collector through generations, the large object heap and \
                 compaction, and see what triggers a collection.",
            ),
            FeatureRecord::new(
                "How to measure it",
                "img/dotnet-bot_builder.svg",
                "Use profiling tools to read allocation rates and pause times, track down \
                 <strong>memory leaks</strong> and tune your applications.",
            ),
        ])
    }

    /// The built-in list for a named feature set.
    pub fn for_set(set: FeatureSet) -> Self {
        match set {
            FeatureSet::GcOverview => Self::gc_overview(),
            FeatureSet::LearningPath => Self::learning_path(),
        }
    }
}

impl FromIterator<FeatureRecord> for FeatureList {
    fn from_iter<I: IntoIterator<Item = FeatureRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeatureList {
    type Item = &'a FeatureRecord;
    type IntoIter = std::slice::Iter<'a, FeatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
