use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use talentdeskapp::model::{CandidateStatus, Difficulty, PipelineStage, TemplateType};
use talentdeskapp::store::VideoList;

/// Version string, with git hash and build date when built from a checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("TALENTDESK_GIT_HASH");
    const BUILD_DATE: &str = env!("TALENTDESK_BUILD_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, BUILD_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "talentdesk",
    bin_name = "talentdesk",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Run without a command to start an interactive session."
)]
#[command(about = "Admin desk for a sports talent-assessment program", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./talentdesk.toml)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// One line typed into a session.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_subcommand = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read commands from stdin against one store until quit/exit or EOF
    #[command(display_order = 1)]
    Session,

    /// Headline numbers
    #[command(alias = "dash", display_order = 2)]
    Dashboard,

    /// Assessment templates
    #[command(subcommand, alias = "tpl", display_order = 10)]
    Templates(TemplateCommands),

    /// Exercise library
    #[command(subcommand, alias = "ex", display_order = 11)]
    Exercises(ExerciseCommands),

    /// Video review queue
    #[command(subcommand, display_order = 12)]
    Videos(VideoCommands),

    /// Talent-pool candidates
    #[command(subcommand, display_order = 13)]
    Candidates(CandidateCommands),

    /// Recruitment pipeline
    #[command(subcommand, display_order = 14)]
    Pipeline(PipelineCommands),

    /// Registered players
    #[command(subcommand, display_order = 15)]
    Players(PlayerCommands),

    /// Activity feed
    #[command(subcommand, alias = "notes", display_order = 16)]
    Notifications(NotificationCommands),

    /// Sidebar navigation state
    #[command(subcommand, display_order = 17)]
    Nav(NavCommands),

    /// Video-analysis service
    #[command(subcommand, display_order = 18)]
    Remote(RemoteCommands),
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List templates
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long = "type")]
        template_type: Option<TemplateType>,
        #[arg(long)]
        sport: Option<String>,
    },

    /// Create a template
    Add {
        name: String,
        #[arg(long = "type")]
        template_type: TemplateType,
        #[arg(long)]
        sport: String,
        /// Number of exercises
        #[arg(long, default_value_t = 1)]
        exercises: u32,
        /// Minutes
        #[arg(long, default_value_t = 10)]
        duration: u32,
        #[arg(long, default_value = "")]
        created_by: String,
        #[arg(long)]
        description: Option<String>,
    },

    /// Change fields of a template
    Update {
        id: String,
        #[command(flatten)]
        fields: TemplateFields,
    },

    /// Copy a template under a new id
    Duplicate { id: String },

    /// Remove a template
    #[command(alias = "rm")]
    Delete { id: String },

    /// Add to (or, with a negative count, subtract from) the assignment count
    Assign {
        id: String,
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
}

#[derive(Args, Debug, Default)]
pub struct TemplateFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type")]
    pub template_type: Option<TemplateType>,
    #[arg(long)]
    pub sport: Option<String>,
    #[arg(long)]
    pub exercises: Option<u32>,
    #[arg(long)]
    pub duration: Option<u32>,
    #[arg(long)]
    pub created_by: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ExerciseCommands {
    /// List exercises
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        sport: Option<String>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Create an exercise
    Add {
        name: String,
        #[arg(long)]
        sport: String,
        #[arg(long)]
        difficulty: Difficulty,
        #[arg(long, default_value = "")]
        description: String,
        /// Target metric, repeatable
        #[arg(long = "metric")]
        metrics: Vec<String>,
        #[arg(long, default_value = "")]
        created_by: String,
        #[arg(long, default_value = "")]
        video_url: String,
        #[arg(long)]
        poster_url: Option<String>,
    },

    /// Change fields of an exercise
    Update {
        id: String,
        #[command(flatten)]
        fields: ExerciseFields,
    },

    /// Remove an exercise
    #[command(alias = "rm")]
    Delete { id: String },
}

#[derive(Args, Debug, Default)]
pub struct ExerciseFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub sport: Option<String>,
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
    #[arg(long)]
    pub description: Option<String>,
    /// Replaces all metrics, repeatable
    #[arg(long = "metric")]
    pub metrics: Vec<String>,
    #[arg(long)]
    pub created_by: Option<String>,
    #[arg(long)]
    pub video_url: Option<String>,
    #[arg(long)]
    pub poster_url: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum VideoListArg {
    #[default]
    Pending,
    Completed,
    Flagged,
}

impl From<VideoListArg> for VideoList {
    fn from(arg: VideoListArg) -> Self {
        match arg {
            VideoListArg::Pending => VideoList::Pending,
            VideoListArg::Completed => VideoList::Completed,
            VideoListArg::Flagged => VideoList::Flagged,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum VideoCommands {
    /// List one review queue
    #[command(alias = "ls")]
    List {
        #[arg(value_enum, default_value_t = VideoListArg::Pending)]
        which: VideoListArg,
    },

    /// Score a pending video
    Review { id: String, score: f64 },

    /// Flag a pending video
    Flag {
        id: String,
        /// Reason words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        reason: Vec<String>,
    },

    /// Score a flagged video
    ReviewFlagged { id: String, score: f64 },

    /// Drop a flagged video
    Unflag { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CandidateCommands {
    /// List candidates
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        status: Option<CandidateStatus>,
    },

    /// Move a candidate to the next status
    Advance { id: String },
}

#[derive(Subcommand, Debug)]
pub enum PipelineCommands {
    /// List pipeline entries
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        stage: Option<PipelineStage>,
    },

    /// Move an entry to the next stage
    Advance { id: String },

    /// Assign an owner to an entry
    Owner {
        id: String,
        #[arg(required = true, trailing_var_arg = true)]
        owner: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlayerCommands {
    /// List players
    #[command(alias = "ls")]
    List {
        /// Name or location
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        sport: Option<String>,
        /// State, matched against the location
        #[arg(long)]
        state: Option<String>,
        /// Only players in the talent pool
        #[arg(long)]
        pool: bool,
    },

    /// Register a player
    Add {
        name: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        location: String,
        #[arg(long)]
        sport: String,
        /// Put the player in the talent pool
        #[arg(long)]
        pool: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotificationCommands {
    /// Show the feed, newest first
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        unread: bool,
    },

    /// Post a free-form notification
    Push {
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
        #[arg(long)]
        kind: Option<String>,
    },

    /// Mark every notification read
    ReadAll,
}

#[derive(Subcommand, Debug)]
pub enum NavCommands {
    /// Show the navigation state and the view it resolves to
    Show,

    /// Switch section (and optionally sub-item)
    Go {
        section: String,
        sub_item: Option<String>,
    },

    /// Expand or collapse a sidebar group
    Toggle { item: String },

    /// Select a player; omit the id to clear
    Select { player_id: Option<String> },
}

#[derive(Subcommand, Debug)]
pub enum RemoteCommands {
    /// Reference templates offered by the service
    Templates,

    /// Upload a video for analysis against a template
    Analyze {
        template_id: String,
        video: PathBuf,
    },
}
