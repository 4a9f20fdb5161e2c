use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inventory_explorer::config::{
    default_dataset_path, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_DOWN_PAYMENT_PERCENT,
    DEFAULT_TERM_MONTHS,
};
use inventory_explorer::format::{
    display_or_dash, display_stock, format_currency, format_price, format_quantity,
    stock_status, warehouse_selection_summary, CURRENCY_SYMBOL,
};
use inventory_explorer::infra::import::open_table_source;
use inventory_explorer::usecase::services::inventory_service::InventoryService;
use inventory_explorer::usecase::services::quota_service::QuotaService;
use inventory_explorer::{
    search_warehouse_options, Catalog, FilterState, LoanSchedule, ProductRecord, QuotaParams,
    MAX_RESULTS,
};

#[derive(Parser, Debug)]
#[command(
    name = "inventory-explorer",
    version,
    about = "Explorador de inventario y calculadora de cuotas"
)]
struct Cli {
    /// Archivo de existencias (CSV, XLSX, XLS u ODS)
    #[arg(short = 'd', long = "data", env = "INVENTORY_DATA", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Busca y filtra productos
    List {
        /// Texto a buscar en código, descripción o bodega
        #[arg(short = 'q', long = "query", default_value = "")]
        query: String,

        /// Bodega a incluir, tal como la lista `options` (repetible)
        #[arg(short = 'w', long = "warehouse")]
        warehouses: Vec<String>,

        /// Clasificación exacta
        #[arg(short = 'c', long = "class", default_value = "")]
        classification: String,
    },
    /// Muestra las bodegas y clasificaciones disponibles
    Options {
        /// Filtra la lista de bodegas
        #[arg(short = 's', long = "search", default_value = "")]
        search: String,
    },
    /// Calcula la tabla de amortización de un producto
    Quota {
        /// Código del artículo
        code: String,

        /// Prima (pago inicial) en porcentaje
        #[arg(long = "down", default_value_t = DEFAULT_DOWN_PAYMENT_PERCENT)]
        down_payment_percent: f64,

        /// Tasa de interés anual en porcentaje
        #[arg(long = "rate", default_value_t = DEFAULT_ANNUAL_RATE_PERCENT)]
        annual_rate_percent: f64,

        /// Plazo en meses
        #[arg(long = "months", default_value_t = DEFAULT_TERM_MONTHS)]
        term_months: u32,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data_path = match cli.data {
        Some(path) => path,
        None => default_dataset_path()?,
    };
    let service = InventoryService::new(Arc::from(open_table_source(&data_path)));
    let catalog = service.load_catalog();

    match cli.command {
        Command::List {
            query,
            warehouses,
            classification,
        } => {
            let state = FilterState {
                search_query: query,
                selected_warehouses: warehouses.into_iter().collect(),
                selected_classification: classification,
            };
            print_listing(&catalog, &state);
        }
        Command::Options { search } => print_options(&catalog, &search),
        Command::Quota {
            code,
            down_payment_percent,
            annual_rate_percent,
            term_months,
        } => {
            let params = QuotaParams {
                down_payment_percent,
                annual_rate_percent,
                term_months,
            };
            params.validate_presets()?;
            let product = catalog
                .find_by_code(&code)
                .ok_or_else(|| anyhow!("no product with code {code} in {}", data_path.display()))?;
            match QuotaService::new().quote(product, &params) {
                Some(schedule) => print_schedule(product, &params, &schedule),
                None => println!(
                    "El producto {} no tiene un precio válido; no aplica el cálculo de cuotas.",
                    product.code
                ),
            }
        }
    }

    Ok(())
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], right_aligned: &[bool]) {
    let line: Vec<String> = cells
        .enumerate()
        .map(|(idx, cell)| {
            if right_aligned[idx] {
                format!("{cell:>width$}", width = widths[idx])
            } else {
                format!("{cell:<width$}", width = widths[idx])
            }
        })
        .collect();
    println!("{}", line.join("  ").trim_end());
}

fn print_table(headers: &[&str], rows: &[Vec<String>], right_aligned: &[bool]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    render_line(headers.iter().copied(), &widths, right_aligned);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rule.join("  "));
    for row in rows {
        render_line(row.iter().map(String::as_str), &widths, right_aligned);
    }
}

fn product_row(product: &ProductRecord) -> Vec<String> {
    let warehouse = if product.warehouse_desc.is_empty() {
        display_or_dash(&product.warehouse).to_string()
    } else {
        product.warehouse_label()
    };
    vec![
        display_or_dash(&product.code).to_string(),
        display_or_dash(&product.description).to_string(),
        warehouse,
        display_or_dash(&product.classification).to_string(),
        display_stock(&product.stock).to_string(),
        stock_status(&product.stock).to_string(),
        format!("{CURRENCY_SYMBOL}{}", format_price(&product.price)),
    ]
}

fn print_listing(catalog: &Catalog, state: &FilterState) {
    let options = catalog.options();
    for label in &state.selected_warehouses {
        if !options.warehouses.contains(label) {
            log::warn!("warehouse {label:?} is not present in the dataset");
        }
    }

    let result = catalog.query(state);
    let view = result.capped(MAX_RESULTS);

    println!(
        "Bodegas: {}",
        warehouse_selection_summary(&state.selected_warehouses, options.warehouses.len())
    );
    if view.is_empty() {
        println!("No se encontraron productos con los filtros aplicados.");
    } else {
        let rows: Vec<Vec<String>> = view.shown.iter().map(|p| product_row(p)).collect();
        print_table(
            &[
                "Código",
                "Descripción",
                "Bodega",
                "Clasificación",
                "Disponible",
                "Estado",
                "Precio",
            ],
            &rows,
            &[false, false, false, false, true, false, true],
        );
    }

    println!();
    println!(
        "{} productos · {} unidades",
        result.count(),
        format_quantity(result.total_stock)
    );
    if view.is_truncated() {
        println!(
            "Mostrando los primeros {} de {} resultados.",
            view.len(),
            view.total
        );
    }
}

fn print_options(catalog: &Catalog, search: &str) {
    let options = catalog.options();
    println!("Bodegas:");
    for label in search_warehouse_options(&options.warehouses, search) {
        println!("  {label}");
    }
    println!("Clasificaciones:");
    for classification in &options.classifications {
        println!("  {classification}");
    }
}

fn print_schedule(product: &ProductRecord, params: &QuotaParams, schedule: &LoanSchedule) {
    let summary = &schedule.summary;
    println!("Calculadora de Cuotas");
    println!("Producto: {} - {}", product.code, product.description);
    println!();
    println!("Cuota Mensual Estimada  {}", format_currency(summary.monthly_payment));
    println!("Precio de Lista         {}", format_currency(summary.principal));
    println!(
        "Prima ({}%)             - {}",
        params.down_payment_percent,
        format_currency(summary.down_payment_amount)
    );
    println!("Monto a Financiar       {}", format_currency(summary.financed_amount));
    println!("Intereses Totales       {}", format_currency(summary.total_interest));
    println!();
    println!("Tabla de Amortización ({} meses)", params.term_months);

    let rows: Vec<Vec<String>> = schedule
        .rows
        .iter()
        .map(|row| {
            vec![
                row.installment_number.to_string(),
                format_currency(row.payment),
                format_currency(row.interest_portion),
                format_currency(row.principal_portion),
                format_currency(row.remaining_balance),
            ]
        })
        .collect();
    print_table(
        &["#", "Cuota", "Interés", "Abono Principal", "Saldo Restante"],
        &rows,
        &[false, true, true, true, true],
    );
}
