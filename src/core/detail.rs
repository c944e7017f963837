use super::experience::{ExperienceItem, Icon, RenderMode};

/// One leadership role in the timeline, numbered from 1.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub step: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailBlock {
    Description(Vec<String>),
    Technologies(Vec<String>),
    Highlights(Vec<String>),
    Achievements(Vec<String>),
    Timeline(Vec<TimelineEntry>),
}

impl DetailBlock {
    pub fn heading(&self) -> &'static str {
        match self {
            DetailBlock::Description(_) => "Description",
            DetailBlock::Technologies(_) => "Technologies",
            DetailBlock::Highlights(_) => "Highlights",
            DetailBlock::Achievements(_) => "Achievements",
            DetailBlock::Timeline(_) => "Leadership Journey",
        }
    }
}

/// Everything the detail dialog shows for one item, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub icon: Icon,
    pub title: String,
    pub subtitle: Option<String>,
    pub period: String,
    pub location: Option<String>,
    pub blocks: Vec<DetailBlock>,
}

impl DetailView {
    pub fn build(item: &ExperienceItem, mode: RenderMode, leadership: &[ExperienceItem]) -> Self {
        let mut blocks = Vec::new();
        if let Some(lines) = &item.description {
            blocks.push(DetailBlock::Description(lines.clone()));
        }
        if let Some(tech) = &item.technologies {
            blocks.push(DetailBlock::Technologies(tech.clone()));
        }
        if let Some(lines) = &item.highlights {
            blocks.push(DetailBlock::Highlights(lines.clone()));
        }
        if let Some(lines) = &item.achievements {
            blocks.push(match mode {
                RenderMode::Standard => DetailBlock::Achievements(lines.clone()),
                RenderMode::LeadershipTimeline => DetailBlock::Timeline(timeline(leadership)),
            });
        }
        Self {
            icon: item.icon,
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            period: item.period.clone(),
            location: item.location.clone(),
            blocks,
        }
    }
}

fn timeline(leadership: &[ExperienceItem]) -> Vec<TimelineEntry> {
    leadership
        .iter()
        .enumerate()
        .map(|(i, role)| TimelineEntry {
            step: i + 1,
            title: role.title.clone(),
            subtitle: role.subtitle.clone(),
            period: role.period.clone(),
            achievements: role.achievements.clone().unwrap_or_default(),
        })
        .collect()
}
