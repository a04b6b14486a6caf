use algorithms::{
    backtracking, branch_bound, dynamic, greedy, mst, sorting, BranchBoundResult, Dijkstra,
    MarathonResult, MstResult, SortKey,
};
use anyhow::{anyhow, Context, Result};
use catalog::query::DEFAULT_DEPTH;
use catalog::{Catalog, Genre, Movie, MovieId};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Combinations grow as 2^n; only the head of the catalog is enumerated
const COMBINATION_POOL: usize = 10;

/// ReelAlgos - classic algorithms over a movie catalog
#[derive(Parser)]
#[command(name = "reel-algos")]
#[command(about = "Sorting, greedy, backtracking, knapsack and graph algorithms over a movie catalog", long_about = None)]
struct Cli {
    /// Path to the catalog directory (movies.dat, similarities.dat)
    #[arg(short, long, default_value = "data/catalog")]
    data_dir: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort the catalog
    Sort {
        #[arg(long, value_enum, default_value = "merge")]
        algorithm: SortAlgorithm,

        #[arg(long, value_enum, default_value = "rating")]
        key: SortField,
    },

    /// Greedy recommendations
    Greedy {
        #[command(subcommand)]
        action: GreedyCommand,
    },

    /// Enumerate combinations by backtracking
    Backtrack {
        #[command(subcommand)]
        action: BacktrackCommand,
    },

    /// Plan the best-rated marathon that fits a time budget
    Marathon {
        #[arg(long, value_enum, default_value = "dp")]
        solver: Solver,

        /// Time budget in minutes
        #[arg(long, default_value = "360")]
        max_time: u32,

        /// Require at least this many movies
        #[arg(long)]
        min_movies: Option<usize>,

        /// Maximize the number of movies instead of their ratings
        #[arg(long, conflicts_with = "min_movies")]
        max_count: bool,
    },

    /// Shortest route between two movies through the similarity graph
    Path {
        #[arg(long)]
        from: MovieId,

        #[arg(long)]
        to: MovieId,
    },

    /// Movies closest to a given one in the similarity graph
    Nearest {
        #[arg(long)]
        from: MovieId,

        #[arg(long, default_value = "5")]
        n: usize,
    },

    /// Look up movies or walk the similarity graph
    Movies {
        #[command(subcommand)]
        action: MoviesCommand,
    },

    /// Minimum spanning tree of the similarity graph
    Mst {
        #[arg(long, value_enum, default_value = "prim")]
        algorithm: MstChoice,

        /// Start movie for Prim (defaults to the first movie)
        #[arg(long)]
        start: Option<MovieId>,
    },
}

#[derive(Subcommand)]
enum GreedyCommand {
    /// Best-rated movie of the most common genre
    Recommend,

    /// Highest-rated movies
    Top {
        #[arg(long, default_value = "5")]
        n: usize,
    },

    /// Fill a time budget best rating first
    Marathon {
        #[arg(long, default_value = "300")]
        max_time: u32,
    },
}

#[derive(Subcommand)]
enum BacktrackCommand {
    /// Sets of movies covering each genre exactly once
    GenreMix {
        /// Comma separated genre names
        #[arg(long, value_delimiter = ',', required = true)]
        genres: Vec<String>,
    },

    /// Sets of movies adding up to an exact running time
    ExactTime {
        #[arg(long, default_value = "240")]
        minutes: u32,
    },

    /// Every combination of a given size
    Combinations {
        #[arg(long, default_value = "3")]
        size: usize,
    },
}

#[derive(Subcommand)]
enum MoviesCommand {
    /// Movies of one genre
    ByGenre { genre: String },

    /// Movies featuring an actor
    WithActor { actor: String },

    /// Best-rated movies first
    Top {
        #[arg(long, default_value = "10")]
        n: usize,
    },

    /// Movies rated strictly above a threshold
    RatedAbove { threshold: f64 },

    /// Movies linked by similarity or a shared genre, closest first
    Related {
        #[arg(long)]
        from: MovieId,

        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Breadth-first walk over similarity edges
    Bfs {
        #[arg(long)]
        from: MovieId,

        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,

        #[arg(long, default_value = "15")]
        limit: usize,
    },

    /// Depth-first walk over similarity edges
    Dfs {
        #[arg(long)]
        from: MovieId,

        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,

        #[arg(long, default_value = "15")]
        limit: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortAlgorithm {
    Quick,
    Merge,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortField {
    Rating,
    Year,
    Duration,
    Title,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Rating => SortKey::RatingDesc,
            SortField::Year => SortKey::YearDesc,
            SortField::Duration => SortKey::DurationAsc,
            SortField::Title => SortKey::TitleAsc,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Solver {
    Dp,
    Bb,
}

#[derive(Clone, Copy, ValueEnum)]
enum MstChoice {
    Prim,
    Kruskal,
}

#[derive(Serialize)]
struct Neighbor {
    movie: Movie,
    distance: f64,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Catalog::load_from_dir(&cli.data_dir)
        .with_context(|| format!("Failed to load catalog from {}", cli.data_dir.display()))?;
    info!("Loaded catalog in {:?}", start.elapsed());

    let json = cli.json;
    match cli.command {
        Commands::Sort { algorithm, key } => handle_sort(&catalog, algorithm, key.into(), json)?,
        Commands::Greedy { action } => handle_greedy(&catalog, action, json)?,
        Commands::Backtrack { action } => handle_backtrack(&catalog, action, json)?,
        Commands::Marathon {
            solver,
            max_time,
            min_movies,
            max_count,
        } => handle_marathon(&catalog, solver, max_time, min_movies, max_count, json)?,
        Commands::Path { from, to } => handle_path(&catalog, from, to, json)?,
        Commands::Nearest { from, n } => handle_nearest(&catalog, from, n, json)?,
        Commands::Movies { action } => handle_movies(&catalog, action, json)?,
        Commands::Mst { algorithm, start } => handle_mst(&catalog, algorithm, start, json)?,
    }

    Ok(())
}

/// Handle the 'sort' command
fn handle_sort(catalog: &Catalog, algorithm: SortAlgorithm, key: SortKey, json: bool) -> Result<()> {
    let sorted = match algorithm {
        SortAlgorithm::Quick => sorting::quick_sort::sort_by_key(catalog.movies(), key),
        SortAlgorithm::Merge => sorting::merge_sort::sort_by_key(catalog.movies(), key),
    };
    if json {
        return print_json(&sorted);
    }

    println!("{}", format!("Catalog sorted by {:?}:", key).bold().blue());
    print_movies(&sorted);
    Ok(())
}

/// Handle the 'greedy' commands
fn handle_greedy(catalog: &Catalog, action: GreedyCommand, json: bool) -> Result<()> {
    match action {
        GreedyCommand::Recommend => {
            let pick = greedy::recommend_by_most_frequent_genre(catalog.movies());
            if json {
                return print_json(&pick);
            }
            match pick {
                Some(movie) => {
                    println!("{}", "Recommended:".bold().blue());
                    print_movies(std::slice::from_ref(movie));
                }
                None => println!("{}", "Catalog is empty".yellow()),
            }
        }
        GreedyCommand::Top { n } => {
            let top = greedy::top_n_by_rating(catalog.movies(), n);
            if json {
                return print_json(&top);
            }
            println!("{}", format!("Top {} by rating:", n).bold().blue());
            print_movies(&top);
        }
        GreedyCommand::Marathon { max_time } => {
            let result = greedy::greedy_marathon(catalog.movies(), max_time);
            if json {
                return print_json(&result);
            }
            print_marathon(&result);
        }
    }
    Ok(())
}

/// Handle the 'backtrack' commands
fn handle_backtrack(catalog: &Catalog, action: BacktrackCommand, json: bool) -> Result<()> {
    let (title, combos) = match action {
        BacktrackCommand::GenreMix { genres } => {
            let desired: Vec<Genre> = genres.iter().map(|g| Genre::new(g.trim())).collect();
            let names = genres.join(", ");
            (
                format!("Genre mixes covering {}:", names),
                backtracking::genre_mix(catalog.movies(), &desired),
            )
        }
        BacktrackCommand::ExactTime { minutes } => (
            format!("Combinations lasting exactly {} minutes:", minutes),
            backtracking::exact_time(catalog.movies(), minutes),
        ),
        BacktrackCommand::Combinations { size } => {
            let movies = catalog.movies();
            let pool = &movies[..movies.len().min(COMBINATION_POOL)];
            info!("Enumerating combinations over the first {} movies", pool.len());
            (
                format!("Combinations of {} among the first {} movies:", size, pool.len()),
                backtracking::combinations(pool, size),
            )
        }
    };
    if json {
        return print_json(&combos);
    }

    println!("{}", title.bold().blue());
    for (i, combo) in combos.iter().enumerate() {
        let titles = combo
            .iter()
            .map(|m| m.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let minutes: u32 = combo.iter().map(|m| m.duration).sum();
        println!("{}. {} ({} min)", (i + 1).to_string().green(), titles, minutes);
    }
    println!("{} combinations", combos.len());
    Ok(())
}

/// Handle the 'marathon' command
fn handle_marathon(
    catalog: &Catalog,
    solver: Solver,
    max_time: u32,
    min_movies: Option<usize>,
    max_count: bool,
    json: bool,
) -> Result<()> {
    let movies = catalog.movies();
    let start = Instant::now();

    match solver {
        Solver::Dp => {
            let result = match (max_count, min_movies) {
                (true, _) => dynamic::max_count_marathon(movies, max_time),
                (false, Some(k)) => dynamic::marathon_with_minimum(movies, max_time, k),
                (false, None) => dynamic::optimal_marathon(movies, max_time),
            };
            info!("Solved in {:?}", start.elapsed());
            if json {
                return print_json(&result);
            }
            print_marathon(&result);
        }
        Solver::Bb => {
            let result = match (max_count, min_movies) {
                (true, _) => branch_bound::max_count_marathon(movies, max_time),
                (false, Some(k)) => branch_bound::marathon_with_minimum(movies, max_time, k),
                (false, None) => branch_bound::optimal_marathon(movies, max_time),
            };
            info!("Solved in {:?}", start.elapsed());
            if json {
                return print_json(&result);
            }
            print_branch_bound(&result);
        }
    }
    Ok(())
}

/// Handle the 'path' command
fn handle_path(catalog: &Catalog, from: MovieId, to: MovieId, json: bool) -> Result<()> {
    require_movie(catalog, from)?;
    require_movie(catalog, to)?;

    let route = Dijkstra::new().shortest_route(catalog.movies(), from, to);
    if json {
        return print_json(&route);
    }

    let Some(route) = route else {
        println!("{}", format!("No route from {} to {}", from, to).yellow());
        return Ok(());
    };
    println!(
        "{}",
        format!("Route from {} to {} (distance {:.4}):", from, to, route.distance)
            .bold()
            .blue()
    );
    print_movies(&route.movies);
    Ok(())
}

/// Handle the 'nearest' command
fn handle_nearest(catalog: &Catalog, from: MovieId, n: usize, json: bool) -> Result<()> {
    require_movie(catalog, from)?;

    let dijkstra = Dijkstra::new();
    let distances = dijkstra.all_distances(catalog.movies(), from);
    let neighbors: Vec<Neighbor> = dijkstra
        .top_n_nearest(catalog.movies(), from, n)
        .into_iter()
        .map(|movie| Neighbor {
            distance: distances.get(&movie.id).copied().unwrap_or(f64::INFINITY),
            movie,
        })
        .collect();
    if json {
        return print_json(&neighbors);
    }

    println!("{}", format!("Closest to {}:", from).bold().blue());
    for (i, neighbor) in neighbors.iter().enumerate() {
        println!(
            "{}. {} - distance {:.4}",
            (i + 1).to_string().green(),
            neighbor.movie.title,
            neighbor.distance
        );
    }
    Ok(())
}

/// Handle the 'movies' commands
fn handle_movies(catalog: &Catalog, action: MoviesCommand, json: bool) -> Result<()> {
    let (title, found) = match action {
        MoviesCommand::ByGenre { genre } => {
            (format!("{} movies:", genre), catalog.movies_by_genre(&genre))
        }
        MoviesCommand::WithActor { actor } => {
            (format!("Movies with {}:", actor), catalog.movies_with_actor(&actor))
        }
        MoviesCommand::Top { n } => (format!("Top {} by rating:", n), catalog.top_rated(n)),
        MoviesCommand::RatedAbove { threshold } => (
            format!("Rated above {:.1}:", threshold),
            catalog.rated_above(threshold),
        ),
        MoviesCommand::Related { from, depth, limit } => {
            require_movie(catalog, from)?;
            (
                format!("Related to {} within {} hops:", from, depth),
                catalog.related(from, depth, limit),
            )
        }
        MoviesCommand::Bfs { from, depth, limit } => {
            require_movie(catalog, from)?;
            let mut found = catalog.bfs(from, depth);
            found.truncate(limit);
            (format!("Breadth-first from {} (depth {}):", from, depth), found)
        }
        MoviesCommand::Dfs { from, depth, limit } => {
            require_movie(catalog, from)?;
            let mut found = catalog.dfs(from, depth);
            found.truncate(limit);
            (format!("Depth-first from {} (depth {}):", from, depth), found)
        }
    };
    if json {
        return print_json(&found);
    }

    println!("{}", title.bold().blue());
    print_movies(found.iter().copied());
    println!("{} movies", found.len());
    Ok(())
}

/// Handle the 'mst' command
fn handle_mst(catalog: &Catalog, algorithm: MstChoice, start: Option<MovieId>, json: bool) -> Result<()> {
    if let Some(id) = start {
        require_movie(catalog, id)?;
    }

    let result = match algorithm {
        MstChoice::Prim => mst::prim(catalog.movies(), start),
        MstChoice::Kruskal => mst::kruskal(catalog.movies()),
    };
    if json {
        return print_json(&result);
    }
    print_mst(catalog, &result);
    Ok(())
}

fn require_movie(catalog: &Catalog, id: MovieId) -> Result<()> {
    if catalog.contains(id) {
        Ok(())
    } else {
        Err(anyhow!("Movie {} not found", id))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", rendered);
    Ok(())
}

/// One line per movie: rank, title, year, minutes, rating, genres
fn print_movies<'a>(movies: impl IntoIterator<Item = &'a Movie>) {
    for (i, movie) in movies.into_iter().enumerate() {
        let genres = movie
            .genres
            .iter()
            .map(|g| g.name())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{}. {} ({}) {} min [{}] - Rating: {:.1}",
            (i + 1).to_string().green(),
            movie.title,
            movie.year,
            movie.duration,
            genres,
            movie.rating
        );
    }
}

fn print_marathon(result: &MarathonResult) {
    println!("{}", result.strategy.to_string().bold().blue());
    print_movies(&result.movies);
    println!(
        "{}Total time: {} min\n{}Total score: {:.2}\n{}Efficiency: {:.4} points/min",
        "• ".cyan(),
        result.total_time,
        "• ".cyan(),
        result.total_score,
        "• ".cyan(),
        result.efficiency
    );
}

fn print_branch_bound(result: &BranchBoundResult) {
    print_marathon(&result.marathon);
    println!(
        "{}Nodes explored: {}\n{}Nodes pruned: {}",
        "• ".cyan(),
        result.nodes_explored,
        "• ".cyan(),
        result.nodes_pruned
    );
}

fn print_mst(catalog: &Catalog, result: &MstResult) {
    println!("{}", format!("{} spanning tree:", result.algorithm).bold().blue());
    let title = |id: MovieId| {
        catalog
            .get_movie(id)
            .map(|m| m.title.clone())
            .unwrap_or_else(|| id.to_string())
    };
    for edge in &result.edges {
        println!(
            "  {} -- {} ({:.2})",
            title(edge.origin),
            title(edge.destination),
            edge.weight
        );
    }
    println!(
        "{}Vertices: {}\n{}Edges: {}\n{}Total weight: {:.2}",
        "• ".cyan(),
        result.vertex_count,
        "• ".cyan(),
        result.edge_count,
        "• ".cyan(),
        result.total_weight
    );
}
