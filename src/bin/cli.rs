//! GraphTheory CLI 工具
//!
//! 计算完全图边数，或构建完全图并打印其边、邻接表和统计信息

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use graphtheory::cli::{PrintMode, Printer};
use graphtheory::{
    complete_directed_edge_count, complete_undirected_edge_count, DirectedGraph, UndirectedGraph,
    Vertex,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphtheory-cli")]
#[command(about = "GraphTheory 命令行工具")]
struct Args {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 计算完全图的边数
    Count {
        /// 顶点数
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        vertices: i64,
    },
    /// 构建 v1..vN 上的完全图并打印
    Complete {
        /// 顶点数
        #[arg(short = 'n', long, default_value = "4")]
        vertices: usize,

        /// 构建有向图（默认无向）
        #[arg(short, long)]
        directed: bool,

        /// 输出格式
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Vertical,
    Json,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Count { vertices } => {
            let directed = complete_directed_edge_count(vertices)
                .with_context(|| format!("无法计算 {} 个顶点的有向完全图边数", vertices))?;
            let undirected = complete_undirected_edge_count(vertices)
                .with_context(|| format!("无法计算 {} 个顶点的无向完全图边数", vertices))?;

            println!("顶点数: {}", vertices);
            println!("  有向完全图边数: {}", directed);
            println!("  无向完全图边数: {}", undirected);
        }
        Command::Complete {
            vertices,
            directed,
            format,
        } => {
            let labels = (1..=vertices).map(|i| Vertex::new(format!("v{}", i)));
            info!(vertices, directed, "building complete graph");

            if directed {
                let graph = DirectedGraph::complete(labels).context("构建有向完全图失败")?;
                let adjacency = graph
                    .vertices()
                    .iter()
                    .map(|v| Ok((v, graph.successors(v)?)))
                    .collect::<graphtheory::Result<Vec<_>>>()?;
                render(
                    format,
                    &graph,
                    graph.edges(),
                    "Successors",
                    &adjacency,
                    graph.is_complete(),
                )?;
            } else {
                let graph = UndirectedGraph::complete(labels).context("构建无向完全图失败")?;
                let adjacency = graph
                    .vertices()
                    .iter()
                    .map(|v| Ok((v, graph.adjacent_vertices(v)?)))
                    .collect::<graphtheory::Result<Vec<_>>>()?;
                render(
                    format,
                    &graph,
                    graph.edges(),
                    "Adjacent",
                    &adjacency,
                    graph.is_complete(),
                )?;
            }
        }
    }

    Ok(())
}

fn render<G, E>(
    format: OutputFormat,
    graph: &G,
    edges: &[E],
    adjacency_title: &str,
    adjacency: &[(&Vertex, Vec<&Vertex>)],
    complete: bool,
) -> anyhow::Result<()>
where
    G: serde::Serialize,
    E: graphtheory::Edge,
{
    let mode = match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(graph).context("序列化图失败")?;
            println!("{}", json);
            return Ok(());
        }
        OutputFormat::Table => PrintMode::Table,
        OutputFormat::Vertical => PrintMode::Vertical,
    };

    let printer = Printer::new(mode);
    print!("{}", printer.print_edges(edges));
    print!("{}", printer.print_adjacency(adjacency_title, adjacency));
    println!(
        "{}",
        printer.print_stats(adjacency.len(), edges.len(), complete)
    );
    Ok(())
}
