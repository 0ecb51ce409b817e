//! 结果打印器
//!
//! 提供表格和垂直格式的图输出

use crate::graph::{Edge, Vertex};
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印任意结果集
    pub fn print_result(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}\n{} row(s) in set\n", output, rows.len())
    }

    /// 打印边列表
    pub fn print_edges<E: Edge>(&self, edges: &[E]) -> String {
        let columns = vec!["#".to_string(), "From".to_string(), "To".to_string()];
        let rows: Vec<Vec<String>> = edges
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let (first, second) = e.endpoints();
                vec![(i + 1).to_string(), first.to_string(), second.to_string()]
            })
            .collect();
        self.print_result(&columns, &rows)
    }

    /// 打印邻接表，`title` 为邻居列的列名
    pub fn print_adjacency(&self, title: &str, adjacency: &[(&Vertex, Vec<&Vertex>)]) -> String {
        let columns = vec!["Vertex".to_string(), title.to_string()];
        let rows: Vec<Vec<String>> = adjacency
            .iter()
            .map(|(vertex, neighbors)| {
                let joined = neighbors
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![vertex.to_string(), joined]
            })
            .collect();
        self.print_result(&columns, &rows)
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize, complete: bool) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.add_row(row!["Complete", complete.to_string()]);
        table.to_string()
    }
}
