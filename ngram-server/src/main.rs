use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use ngram_core::model::{GroupedNGrams, NGramEngine};
use ngram_core::{Diagnostic, EngineConfig};

/// Command-line settings for the server.
#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP service counting word n-grams", long_about = None)]
struct ServerArgs {
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	#[arg(short, long, default_value_t = 5000)]
	port: u16,

	/// JSON file with `match_mode` / `split_mode`
	#[arg(short, long)]
	config: Option<String>,

	/// Largest `max_length` a request may ask for. One segment is built per
	/// length, so this bounds the work of a single request.
	#[arg(long, default_value_t = DEFAULT_MAX_LENGTH_LIMIT)]
	max_length_limit: usize,
}

const DEFAULT_MAX_LENGTH_LIMIT: usize = 64;

/// Read-only state shared by every worker.
struct SharedData {
	engine: NGramEngine,
	max_length_limit: usize,
}

impl SharedData {
	/// Rejects lengths above the configured limit.
	fn check_max_length(&self, requested: usize) -> Result<(), Diagnostic> {
		if requested > self.max_length_limit {
			let diagnostic = Diagnostic::MaxLengthTooLarge { requested, limit: self.max_length_limit };
			warn!("Request rejected: {}", diagnostic);
			return Err(diagnostic);
		}
		Ok(())
	}
}

/// Body of the `/v1/ngrams` endpoint
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NGramRequest {
	text: String,
	max_length: usize,
	#[serde(default = "default_sorted")]
	sorted: bool,
}

fn default_sorted() -> bool {
	true
}

/// Struct representing query parameters for the `/v1/occurrences` endpoint
#[derive(Deserialize)]
struct OccurrencesQuery {
	text: Option<String>,
	max_length: Option<usize>,
	length: Option<usize>,
	word: Option<String>,
}

#[derive(Serialize)]
struct NGramResponse {
	results: GroupedNGrams,
	diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize)]
struct RejectedResponse {
	diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize)]
struct OccurrencesResponse {
	occurrences: usize,
	diagnostics: Vec<Diagnostic>,
}

/// HTTP POST endpoint `/v1/ngrams`
///
/// Counts the n-grams of the posted text. Every request gets its own
/// result set; invalid input comes back as diagnostics with a 200, while a
/// `maxLength` above the limit is refused with a 400.
#[post("/v1/ngrams")]
async fn post_ngrams(data: web::Data<SharedData>, body: web::Json<NGramRequest>) -> impl Responder {
	if let Err(diagnostic) = data.check_max_length(body.max_length) {
		return HttpResponse::BadRequest().json(RejectedResponse { diagnostics: vec![diagnostic] });
	}

	let analysis = data.engine.process_document(&body.text, body.max_length);
	HttpResponse::Ok().json(NGramResponse {
		results: analysis.grouped(body.sorted),
		diagnostics: analysis.diagnostics().to_vec(),
	})
}

/// HTTP GET endpoint `/v1/occurrences`
///
/// Processes `text` up to `max_length` (defaults to `length`) and counts
/// the entries of segment `length` containing `word`.
#[get("/v1/occurrences")]
async fn get_occurrences(data: web::Data<SharedData>, query: web::Query<OccurrencesQuery>) -> impl Responder {
	let length = query.length.unwrap_or(0);
	let max_length = query.max_length.unwrap_or(length);
	let text = query.text.as_deref().unwrap_or_default();
	let word = query.word.as_deref().unwrap_or_default();

	if let Err(diagnostic) = data.check_max_length(max_length) {
		return HttpResponse::BadRequest().json(RejectedResponse { diagnostics: vec![diagnostic] });
	}

	let analysis = data.engine.process_document(text, max_length);
	let mut diagnostics = analysis.diagnostics().to_vec();
	let occurrences = match analysis.occurrences_of_word(length, word) {
		Ok(n) => n,
		Err(diagnostic) => {
			diagnostics.push(diagnostic);
			0
		}
	};

	HttpResponse::Ok().json(OccurrencesResponse { occurrences, diagnostics })
}

#[get("/v1/config")]
async fn get_config(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().json(data.engine.config())
}

fn load_config(path: Option<&str>) -> std::io::Result<EngineConfig> {
	match path {
		None => Ok(EngineConfig::default()),
		Some(path) => EngineConfig::load_from_file(path).map_err(|e| {
			error!("Failed to load config {}: {}", path, e);
			std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
		}),
	}
}

/// Main entry point for the server.
///
/// The engine only carries its read-only configuration, so it is shared
/// between workers without a lock.
///
/// # Notes
/// - `--max-length-limit` (default 64) caps `maxLength` per request.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	tracing_subscriber::fmt::init();

	let args = ServerArgs::parse();
	let config = load_config(args.config.as_deref())?;
	let shared_data = web::Data::new(SharedData {
		engine: NGramEngine::new(config),
		max_length_limit: args.max_length_limit,
	});

	info!(
		"Listening on {}:{} (match: {}, split: {}, max length limit: {})",
		args.host, args.port, config.match_mode, config.split_mode, args.max_length_limit
	);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(post_ngrams)
			.service(get_occurrences)
			.service(get_config)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}
