/// How a context field is treated by the rich-text rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A list whose string items become styled text.
    RichTextList,
    /// A single string that becomes styled text.
    RichTextScalar,
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RichField {
    Summary,
    ResponsibilitiesCh,
    ResponsibilitiesSs,
    ResponsibilitiesSm,
    EngagementSummaryCh,
    EngagementSummarySs,
    EngagementSummarySm,
}

impl RichField {
    pub const ALL: [RichField; 7] = [
        RichField::Summary,
        RichField::ResponsibilitiesCh,
        RichField::ResponsibilitiesSs,
        RichField::ResponsibilitiesSm,
        RichField::EngagementSummaryCh,
        RichField::EngagementSummarySs,
        RichField::EngagementSummarySm,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SUMMARY" => Some(RichField::Summary),
            "RESPONSIBILITIES_CH" => Some(RichField::ResponsibilitiesCh),
            "RESPONSIBILITIES_SS" => Some(RichField::ResponsibilitiesSs),
            "RESPONSIBILITIES_SM" => Some(RichField::ResponsibilitiesSm),
            "ENGAGEMENT_SUMMARY_CH" => Some(RichField::EngagementSummaryCh),
            "ENGAGEMENT_SUMMARY_SS" => Some(RichField::EngagementSummarySs),
            "ENGAGEMENT_SUMMARY_SM" => Some(RichField::EngagementSummarySm),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RichField::Summary => "SUMMARY",
            RichField::ResponsibilitiesCh => "RESPONSIBILITIES_CH",
            RichField::ResponsibilitiesSs => "RESPONSIBILITIES_SS",
            RichField::ResponsibilitiesSm => "RESPONSIBILITIES_SM",
            RichField::EngagementSummaryCh => "ENGAGEMENT_SUMMARY_CH",
            RichField::EngagementSummarySs => "ENGAGEMENT_SUMMARY_SS",
            RichField::EngagementSummarySm => "ENGAGEMENT_SUMMARY_SM",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            RichField::Summary
            | RichField::ResponsibilitiesCh
            | RichField::ResponsibilitiesSs
            | RichField::ResponsibilitiesSm => FieldKind::RichTextList,
            RichField::EngagementSummaryCh
            | RichField::EngagementSummarySs
            | RichField::EngagementSummarySm => FieldKind::RichTextScalar,
        }
    }
}

pub fn classify(name: &str) -> FieldKind {
    RichField::from_name(name).map_or(FieldKind::PassThrough, RichField::kind)
}
