//! Fixed sample data every store starts from.
//!
//! There is no persistence: a freshly seeded store always looks exactly like
//! this, on every process start.

use crate::model::{
    Candidate, CandidateStatus, Difficulty, Exercise, PipelineEntry, PipelineStage, Player,
    Template, TemplateType, VideoCompleted, VideoFlagged, VideoPending,
};
use crate::notifications::NotificationFeed;
use crate::store::AppState;

pub fn initial_state() -> AppState {
    AppState {
        templates: templates(),
        exercises: exercises(),
        candidates: candidates(),
        pipeline: pipeline(),
        players: players(),
        videos_pending: videos_pending(),
        videos_completed: videos_completed(),
        videos_flagged: videos_flagged(),
        notifications: NotificationFeed::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    template_type: TemplateType,
    sport: &str,
    exercises: u32,
    duration: u32,
    assignments: i64,
    avg_score: f64,
    created_by: &str,
    created_at: &str,
    is_active: bool,
) -> Template {
    Template {
        id: id.into(),
        name: name.into(),
        template_type,
        sport: sport.into(),
        exercises,
        duration,
        assignments,
        avg_score,
        created_by: created_by.into(),
        created_at: created_at.into(),
        is_active,
        description: None,
    }
}

#[rustfmt::skip]
fn templates() -> Vec<Template> {
    use TemplateType::*;
    vec![
        template("TPL001", "Basketball Assessment Battery", Assessment, "Basketball", 6, 45, 89, 8.2, "Omkar", "2024-01-15", true),
        template("TPL002", "Football Skills Evaluation", Skills, "Football", 8, 60, 124, 7.9, "Nishant", "2024-01-10", true),
        template("TPL003", "General Fitness Test", Fitness, "General", 5, 30, 267, 7.6, "Atharv", "2024-01-08", true),
        template("TPL004", "Swimming Technique Program", Training, "Swimming", 4, 40, 56, 8.7, "Prachi", "2024-01-05", false),
        template("TPL005", "Athletics Sprint Assessment", Assessment, "Athletics", 7, 35, 178, 8.0, "Ishita", "2024-01-03", true),
    ]
}

struct ExerciseSeed<'a> {
    id: &'a str,
    name: &'a str,
    sport: &'a str,
    difficulty: Difficulty,
    description: &'a str,
    metrics: [&'a str; 3],
    submissions: u64,
    avg_score: f64,
    created_by: &'a str,
    created_at: &'a str,
    video_url: &'a str,
    poster_url: &'a str,
}

impl From<ExerciseSeed<'_>> for Exercise {
    fn from(seed: ExerciseSeed<'_>) -> Self {
        Exercise {
            id: seed.id.into(),
            name: seed.name.into(),
            sport: seed.sport.into(),
            difficulty: seed.difficulty,
            description: seed.description.into(),
            metrics: seed.metrics.iter().map(|m| m.to_string()).collect(),
            submissions: seed.submissions,
            avg_score: seed.avg_score,
            created_by: seed.created_by.into(),
            created_at: seed.created_at.into(),
            video_url: seed.video_url.into(),
            poster_url: Some(seed.poster_url.into()),
        }
    }
}

fn exercises() -> Vec<Exercise> {
    vec![
        ExerciseSeed {
            id: "EX001",
            name: "Vertical Jump Test",
            sport: "Athletics",
            difficulty: Difficulty::Beginner,
            description: "Measures explosive leg power and vertical leap ability",
            metrics: ["Power", "Technique", "Height"],
            submissions: 245,
            avg_score: 7.8,
            created_by: "Omkar",
            created_at: "2024-01-15",
            video_url: "https://cdn.coverr.co/videos/coverr-runner-in-the-city-4402/1080p.mp4",
            poster_url: "https://images.unsplash.com/photo-1521412644187-c49fa049e84d?auto=format&fit=crop&w=800&q=60",
        },
        ExerciseSeed {
            id: "EX002",
            name: "Shuttle Run 20m",
            sport: "Basketball",
            difficulty: Difficulty::Intermediate,
            description: "Tests agility, speed, and change of direction",
            metrics: ["Speed", "Agility", "Endurance"],
            submissions: 189,
            avg_score: 8.2,
            created_by: "Nishant",
            created_at: "2024-01-10",
            video_url: "https://cdn.coverr.co/videos/coverr-basketball-player-dribbling-1736/1080p.mp4",
            poster_url: "https://images.unsplash.com/photo-1519861531473-9200262188bf?auto=format&fit=crop&w=800&q=60",
        },
        ExerciseSeed {
            id: "EX003",
            name: "Push-up Endurance",
            sport: "General",
            difficulty: Difficulty::Beginner,
            description: "Measures upper body strength and endurance",
            metrics: ["Strength", "Endurance", "Form"],
            submissions: 312,
            avg_score: 7.5,
            created_by: "Atharv",
            created_at: "2024-01-08",
            video_url: "https://cdn.coverr.co/videos/coverr-gym-pushups-5458/1080p.mp4",
            poster_url: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?auto=format&fit=crop&w=800&q=60",
        },
        ExerciseSeed {
            id: "EX004",
            name: "Swimming Technique",
            sport: "Swimming",
            difficulty: Difficulty::Advanced,
            description: "Evaluates stroke technique and efficiency",
            metrics: ["Technique", "Speed", "Efficiency"],
            submissions: 98,
            avg_score: 8.7,
            created_by: "Prachi",
            created_at: "2024-01-05",
            video_url: "https://cdn.coverr.co/videos/coverr-swimmer-underwater-5303/1080p.mp4",
            poster_url: "https://images.unsplash.com/photo-1508830524289-0adcbe822b40?auto=format&fit=crop&w=800&q=60",
        },
        ExerciseSeed {
            id: "EX005",
            name: "Football Dribbling",
            sport: "Football",
            difficulty: Difficulty::Intermediate,
            description: "Tests ball control and dribbling skills",
            metrics: ["Control", "Speed", "Accuracy"],
            submissions: 167,
            avg_score: 7.9,
            created_by: "Ishita",
            created_at: "2024-01-03",
            video_url: "https://cdn.coverr.co/videos/coverr-football-player-kicking-ball-9493/1080p.mp4",
            poster_url: "https://images.unsplash.com/photo-1601758124513-c62663cfbe69?auto=format&fit=crop&w=800&q=60",
        },
        ExerciseSeed {
            id: "EX006",
            name: "Boxing Combination",
            sport: "Boxing",
            difficulty: Difficulty::Advanced,
            description: "Evaluates punch combinations and technique",
            metrics: ["Technique", "Power", "Speed"],
            submissions: 78,
            avg_score: 8.4,
            created_by: "Diksha",
            created_at: "2024-01-01",
            video_url: "https://cdn.coverr.co/videos/coverr-boxing-training-5828/1080p.mp4",
            poster_url: "https://images.unsplash.com/photo-1517430816045-df4b7de11d1d?auto=format&fit=crop&w=800&q=60",
        },
    ]
    .into_iter()
    .map(Exercise::from)
    .collect()
}

#[rustfmt::skip]
fn candidates() -> Vec<Candidate> {
    let candidate = |id: &str, name: &str, sport: &str, score: f64, status| Candidate {
        id: id.into(),
        name: name.into(),
        sport: sport.into(),
        score,
        status,
        owner: None,
    };
    vec![
        candidate("ATH001", "Diksha", "Athletics", 9.1, CandidateStatus::Shortlisted),
        candidate("BBL002", "Hritesh", "Basketball", 8.8, CandidateStatus::Interview),
        candidate("BDM005", "Prachi", "Badminton", 8.5, CandidateStatus::Shortlisted),
    ]
}

#[rustfmt::skip]
fn pipeline() -> Vec<PipelineEntry> {
    let entry = |id: &str, name: &str, sport: &str, score: f64, status| PipelineEntry {
        id: id.into(),
        name: name.into(),
        sport: sport.into(),
        score,
        status,
        owner: None,
    };
    vec![
        entry("ATH001", "Diksha", "Athletics", 9.1, PipelineStage::Screening),
        entry("BBL002", "Hritesh", "Basketball", 8.8, PipelineStage::Interview),
        entry("FTB004", "Nidhish", "Football", 8.2, PipelineStage::Trials),
    ]
}

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    age: u32,
    location: &str,
    primary_sport: &str,
    join_date: &str,
    total_videos: u32,
    average_score: f64,
    in_talent_pool: bool,
    last_active: &str,
) -> Player {
    Player {
        id: id.into(),
        name: name.into(),
        age,
        location: location.into(),
        primary_sport: primary_sport.into(),
        join_date: join_date.into(),
        total_videos,
        average_score,
        in_talent_pool,
        last_active: last_active.into(),
    }
}

#[rustfmt::skip]
fn players() -> Vec<Player> {
    vec![
        player("PLY001", "Nishant", 20, "Mumbai, Maharashtra", "Athletics", "2024-08-15", 12, 8.6, true, "2h ago"),
        player("PLY002", "Omkar", 21, "Pune, Maharashtra", "Basketball", "2024-07-22", 18, 8.9, true, "1h ago"),
        player("PLY003", "Atharv", 19, "Nagpur, Maharashtra", "Football", "2024-06-10", 10, 8.1, false, "Today"),
        player("PLY004", "Nidhish", 22, "Chennai, Tamil Nadu", "Swimming", "2024-05-05", 9, 8.3, false, "Yesterday"),
        player("PLY005", "Hritesh", 20, "Delhi, Delhi", "Athletics", "2024-04-11", 20, 8.4, true, "3h ago"),
        player("PLY006", "Qusai", 21, "Hyderabad, Telangana", "Boxing", "2024-03-01", 15, 8.0, false, "5h ago"),
        player("PLY007", "Ishita", 18, "Ahmedabad, Gujarat", "Badminton", "2024-02-18", 11, 8.7, true, "30m ago"),
        player("PLY008", "Diksha", 19, "Bhopal, MP", "Wrestling", "2024-01-20", 7, 7.9, false, "1d ago"),
        player("PLY009", "Prachi", 19, "Jaipur, Rajasthan", "Football", "2024-01-02", 14, 8.5, true, "4h ago"),
    ]
}

const FLOWER_CLIP: &str =
    "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";
const BEE_CLIP: &str = "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/bee.mp4";

fn videos_pending() -> Vec<VideoPending> {
    vec![
        VideoPending {
            id: "V001".into(),
            player: "Ishita".into(),
            exercise: "Vertical Jump".into(),
            submitted: "2025-09-20".into(),
            video_url: FLOWER_CLIP.into(),
        },
        VideoPending {
            id: "V002".into(),
            player: "Omkar".into(),
            exercise: "Sprint".into(),
            submitted: "2025-09-22".into(),
            video_url: BEE_CLIP.into(),
        },
    ]
}

fn videos_completed() -> Vec<VideoCompleted> {
    vec![
        VideoCompleted {
            id: "V010".into(),
            player: "Nishant".into(),
            exercise: "Freestyle 50m".into(),
            score: 8.9,
            reviewed_on: "2025-09-18".into(),
            video_url: FLOWER_CLIP.into(),
        },
        VideoCompleted {
            id: "V011".into(),
            player: "Atharv".into(),
            exercise: "Sprint".into(),
            score: 8.2,
            reviewed_on: "2025-09-19".into(),
            video_url: BEE_CLIP.into(),
        },
    ]
}

fn videos_flagged() -> Vec<VideoFlagged> {
    vec![VideoFlagged {
        id: "V020".into(),
        player: "Qusai".into(),
        reason: "Inappropriate content".into(),
        flagged_on: "2025-09-23".into(),
        video_url: FLOWER_CLIP.into(),
    }]
}
