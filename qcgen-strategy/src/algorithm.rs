//! Renders a [`Strategy`] as a framework algorithm class.

use qcgen_codegen::{BuilderConfig, SourceBuilder};

use crate::{
    catalog::{Alpha, Execution, Portfolio, Risk, SelectionCallback, Universe},
    strategy::Strategy,
};

/// Renders the algorithm source for a strategy.
#[derive(Debug, Clone)]
pub struct AlgorithmRenderer<'a> {
    strategy: &'a Strategy,
    config: BuilderConfig,
}

impl<'a> AlgorithmRenderer<'a> {
    pub fn new(strategy: &'a Strategy) -> Self {
        Self {
            strategy,
            config: BuilderConfig::default(),
        }
    }

    /// Use a different indent unit or docstring layout.
    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the complete algorithm source.
    pub fn render(&self) -> String {
        let strategy = self.strategy;
        tracing::debug!(name = %strategy.name, "rendering algorithm");

        let mut sb = SourceBuilder::new(self.config.clone());
        {
            let mut class = sb.block(&format!("class {}(QCAlgorithm):", strategy.name), 0);
            class.docstring(&self.summary());
            self.initialize(&mut class);
            for &callback in strategy.universe.selection_callbacks() {
                selection_callback(&mut class, callback);
            }
            on_data(&mut class);
        }

        let source = sb.end();
        tracing::debug!(bytes = source.len(), "algorithm rendered");
        source
    }

    fn summary(&self) -> String {
        let s = self.strategy;
        format!(
            "Algorithm framework strategy combining the selected alpha, universe, \
             portfolio construction, execution and risk management models.\n\
             \n\
             Alpha: {}\n\
             Universe: {}\n\
             Portfolio: {}\n\
             Execution: {}\n\
             Risk: {}",
            s.alpha, s.universe, s.portfolio, s.execution, s.risk
        )
    }

    fn initialize(&self, sb: &mut SourceBuilder) {
        let s = self.strategy;
        let mut body = sb.block("def Initialize(self):", 1);

        body.writeln(&format!("self.SetStartDate({}) # Set Start Date", s.start));
        body.writeln(&format!("self.SetCash({}) # Set Strategy Cash", s.cash));
        body.writeln("#self.AddEquity(\"SPY\", Resolution.Minute)");
        body.blank();

        alpha(&mut body, s.alpha);
        body.blank();
        execution(&mut body, s.execution);
        body.blank();
        portfolio(&mut body, s.portfolio);
        body.blank();
        risk(&mut body, s.risk);
        body.blank();
        universe(&mut body, s.universe);
    }
}

fn alpha(sb: &mut SourceBuilder, alpha: Alpha) {
    let model = match alpha {
        Alpha::Rsi => "RsiAlphaModel(60, Resolution.Minute)",
        Alpha::EmaCross => "EmaCrossAlphaModel(50, 200, Resolution.Minute)",
        Alpha::Macd => "MacdAlphaModel(12, 26, 9, MovingAverageType.Simple, Resolution.Daily)",
        Alpha::HistoricalReturns => "HistoricalReturnsAlphaModel(14, Resolution.Daily)",
        Alpha::PairsTrading => "PearsonCorrelationPairsTradingAlphaModel(252, Resolution.Daily)",
        Alpha::None => return,
    };
    sb.writeln(&format!("self.AddAlpha({model})"));
}

fn execution(sb: &mut SourceBuilder, execution: Execution) {
    let model = match execution {
        Execution::Immediate => "ImmediateExecutionModel()",
        Execution::Vwap => "VolumeWeightedAveragePriceExecutionModel()",
        Execution::StandardDeviation => "StandardDeviationExecutionModel(60, 2, Resolution.Minute)",
        Execution::None => return,
    };
    sb.writeln(&format!("self.SetExecution({model})"));
}

fn portfolio(sb: &mut SourceBuilder, portfolio: Portfolio) {
    let model = match portfolio {
        Portfolio::EqualWeighting => "EqualWeightingPortfolioConstructionModel()",
        Portfolio::MeanVariance => "MeanVarianceOptimizationPortfolioConstructionModel()",
        Portfolio::BlackLitterman => "BlackLittermanOptimizationPortfolioConstructionModel()",
        Portfolio::None => return,
    };
    sb.writeln(&format!("self.SetPortfolioConstruction({model})"));
}

fn risk(sb: &mut SourceBuilder, risk: Risk) {
    let model = match risk {
        Risk::MaximumDrawdown => "MaximumDrawdownPercentPerSecurity(0.01)",
        Risk::SectorExposure => "MaximumSectorExposureRiskManagementModel()",
        Risk::None => return,
    };
    sb.writeln(&format!("self.SetRiskManagement({model})"));
}

fn universe(sb: &mut SourceBuilder, universe: Universe) {
    match universe {
        Universe::LargeCapEquities => {
            sb.writeln("self.SetUniverseSelection(QC500UniverseSelectionModel())");
        }
        Universe::EmaCrossUniverse => {
            sb.writeln("fastPeriod = 10");
            sb.writeln("slowPeriod = 30");
            sb.writeln("count = 10");
            sb.writeln(
                "self.SetUniverseSelection(EmaCrossUniverseSelectionModel(fastPeriod, slowPeriod, count))",
            );
        }
        Universe::CoarseUniverse => {
            sb.writeln(
                "self.SetUniverseSelection(CoarseFundamentalUniverseSelectionModel(self.CoarseSelectionFunction))",
            );
        }
        Universe::CoarseFineUniverse => {
            sb.writeln("self.__numberOfSymbols = 100");
            sb.writeln("self.__numberOfSymbolsFine = 5");
            sb.writeln(
                "self.SetUniverseSelection(FineFundamentalUniverseSelectionModel(self.CoarseSelectionFunction, self.FineSelectionFunction, None, None))",
            );
        }
        Universe::ScheduledUniverse => {
            sb.writeln("# selection will run on mon/tues/thurs at 00:00/06:00/12:00/18:00");
            sb.writeln("self.SetUniverseSelection(ScheduledUniverseSelectionModel(");
            {
                let mut args = sb.indent();
                args.writeln(
                    "self.DateRules.Every(DayOfWeek.Monday, DayOfWeek.Tuesday, DayOfWeek.Thursday),",
                );
                args.writeln("self.TimeRules.Every(timedelta(hours = 12)),");
                args.writeln("self.SelectSymbols");
            }
            sb.writeln("))");
        }
        Universe::ManualSelection => {
            sb.writeln("symbols = [ Symbol.Create(\"SPY\", SecurityType.Equity, Market.USA) ]");
            sb.writeln("self.SetUniverseSelection( ManualUniverseSelectionModel(symbols) )");
        }
        Universe::None => {}
    }
}

fn selection_callback(sb: &mut SourceBuilder, callback: SelectionCallback) {
    let name = callback.method_name();
    match callback {
        SelectionCallback::Coarse => {
            let mut body = sb.block(&format!("def {name}(self, coarse):"), 1);
            body.writeln(
                "sortedByDollarVolume = sorted(coarse, key=lambda x: x.DollarVolume, reverse=True)",
            );
            body.writeln("return [ x.Symbol for x in sortedByDollarVolume[:100] ]");
        }
        SelectionCallback::Fine => {
            let mut body = sb.block(&format!("def {name}(self, fine):"), 1);
            body.writeln(
                "sortedByPeRatio = sorted(fine, key=lambda x: x.ValuationRatios.PERatio, reverse=True)",
            );
            body.writeln("return [ x.Symbol for x in sortedByPeRatio[:self.__numberOfSymbolsFine] ]");
        }
        SelectionCallback::Scheduled => {
            let mut body = sb.block(&format!("def {name}(self, dateTime):"), 1);
            body.writeln("return [ Symbol.Create(\"SPY\", SecurityType.Equity, Market.USA) ]");
        }
    }
}

fn on_data(sb: &mut SourceBuilder) {
    let mut body = sb.block("def OnData(self, data):", 1);
    body.writeln("# if not self.Portfolio.Invested:");
    body.writeln("#    self.SetHoldings(\"SPY\", 1)");
}

/// Render `strategy` with the default configuration.
pub fn render(strategy: &Strategy) -> String {
    AlgorithmRenderer::new(strategy).render()
}
