//! AI-generated summaries (experimental upstream)

use crate::review::Review;
use crate::types::LocalizedText;

schema_struct! {
    /// Content that a generated summary refers to.
    #[derive(Clone, Debug, PartialEq)]
    pub struct References {
        pub reviews: Option<Vec<Review>> => "reviews",
        /// Resource names of the referenced places.
        pub places: Option<Vec<String>> => "places",
    }
}

schema_struct! {
    /// AI-generated summary of a place.
    #[derive(Clone, Debug, PartialEq)]
    pub struct GenerativeSummary {
        pub overview: Option<LocalizedText> => "overview",
        pub overview_flag_content_uri: Option<String> => "overviewFlagContentUri",
        pub description: Option<LocalizedText> => "description",
        pub description_flag_content_uri: Option<String> => "descriptionFlagContentUri",
        pub references: Option<References> => "references",
    }
}

schema_struct! {
    /// A block of content about one topic.
    #[derive(Clone, Debug, PartialEq)]
    pub struct ContentBlock {
        /// For example "overview" or "restaurant".
        pub topic: Option<String> => "topic",
        pub content: Option<LocalizedText> => "content",
        pub references: Option<References> => "references",
    }
}

schema_struct! {
    /// AI-generated summary of the area a place is in.
    #[derive(Clone, Debug, PartialEq)]
    pub struct AreaSummary {
        pub content_blocks: Option<Vec<ContentBlock>> => "contentBlocks",
        pub flag_content_uri: Option<String> => "flagContentUri",
    }
}
