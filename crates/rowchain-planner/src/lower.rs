//! Lowering: `Pipeline` → `UnaryOperator` chain.

use rowchain_core::config::ExecConfig;
use rowchain_core::schema::Field;
use rowchain_operators::{
    Filter, Limit, Operator, RowCompute, Selection, Sort, UnaryOperator,
};

use crate::dsl::{Pipeline, Step};
use crate::error::PlanError;
use crate::registry::FunctionRegistry;

/// Build the chain described by `pipeline`.
///
/// Filter length policy precedence: step, then pipeline config, then `cfg`.
/// Pipelines longer than `cfg.max_chain_depth` are rejected.
pub fn lower_to_chain(
    pipeline: &Pipeline,
    registry: &FunctionRegistry,
    cfg: &ExecConfig,
) -> Result<UnaryOperator, PlanError> {
    if pipeline.steps.len() > cfg.max_chain_depth {
        return Err(PlanError::TooDeep {
            steps: pipeline.steps.len(),
            limit: cfg.max_chain_depth,
        });
    }

    let default_policy = pipeline
        .config
        .as_ref()
        .and_then(|c| c.filter_policy)
        .unwrap_or(cfg.filter_policy);

    let mut chain: Option<UnaryOperator> = None;
    for step in &pipeline.steps {
        tracing::trace!(step = step.key(), "lowering step");
        let op: Box<dyn Operator> = match step {
            Step::Limit { limit } => Box::new(Limit::new(*limit)),
            Step::Select { columns } => Box::new(Selection::new(columns.clone())),
            Step::Filter { flags, policy } => Box::new(
                Filter::new(flags.clone()).with_policy(policy.unwrap_or(default_policy)),
            ),
            Step::Sort { column, direction } => Box::new(Sort::new(*column, *direction)),
            Step::Compute { function, alias } => {
                let func = registry
                    .get(function)
                    .ok_or_else(|| PlanError::UnknownFunction(function.clone()))?;
                let name = alias.clone().unwrap_or_else(|| function.clone());
                Box::new(RowCompute::from_fn(func).with_output(Field::untyped(name)))
            }
            Step::Arith {
                left,
                operator,
                right,
                alias,
            } => {
                let name = alias
                    .clone()
                    .unwrap_or_else(|| format!("{}_{}_{}", operator, left, right));
                Box::new(RowCompute::arith(*left, *operator, *right).with_output(Field::untyped(name)))
            }
        };

        chain = Some(match chain {
            None => UnaryOperator::from_boxed(op),
            Some(child) => child.then_boxed(op),
        });
    }

    let chain = chain.ok_or(PlanError::Empty)?;
    tracing::debug!(stages = ?chain.names(), "lowered pipeline");
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::PipelineConfig;
    use rowchain_core::config::FilterLengthPolicy;
    use rowchain_core::error::ErrorKind;
    use rowchain_core::row;
    use rowchain_core::row::RowSet;
    use rowchain_operators::SortDirection;

    fn batch() -> RowSet {
        RowSet::from(vec![row![1, "b"], row![3, "a"], row![2, "a"]])
    }

    #[test]
    fn steps_run_in_listed_order() {
        let pipeline = Pipeline::new(vec![
            Step::Sort {
                column: 0,
                direction: SortDirection::Descending,
            },
            Step::Limit { limit: 2 },
            Step::Select { columns: vec![0] },
        ]);
        let chain = lower_to_chain(&pipeline, &FunctionRegistry::new(), &ExecConfig::default()).unwrap();
        assert_eq!(chain.names(), vec!["sort", "limit", "selection"]);
        assert_eq!(
            chain.execute_all(batch()).unwrap(),
            RowSet::from(vec![row![3], row![2]])
        );
    }

    #[test]
    fn empty_pipeline_is_rejected() {
        let err = lower_to_chain(&Pipeline::default(), &FunctionRegistry::new(), &ExecConfig::default())
            .unwrap_err();
        assert!(matches!(err, PlanError::Empty));
    }

    #[test]
    fn pipeline_deeper_than_limit_is_rejected() {
        let cfg = ExecConfig {
            max_chain_depth: 3,
            ..ExecConfig::default()
        };
        let pipeline = Pipeline::new(vec![Step::Limit { limit: 1 }; 4]);
        let err = lower_to_chain(&pipeline, &FunctionRegistry::new(), &cfg).unwrap_err();
        assert!(matches!(err, PlanError::TooDeep { steps: 4, limit: 3 }));

        let fits = Pipeline::new(vec![Step::Limit { limit: 1 }; 3]);
        assert_eq!(lower_to_chain(&fits, &FunctionRegistry::new(), &cfg).unwrap().depth(), 3);
    }

    #[test]
    fn unknown_function_is_rejected() {
        let pipeline = Pipeline::new(vec![Step::Compute {
            function: "nope".into(),
            alias: None,
        }]);
        let err = lower_to_chain(&pipeline, &FunctionRegistry::new(), &ExecConfig::default())
            .unwrap_err();
        assert!(matches!(err, PlanError::UnknownFunction(name) if name == "nope"));
    }

    #[test]
    fn filter_policy_precedence() {
        let short = Step::Filter {
            flags: vec![true],
            policy: None,
        };

        let mut pipeline = Pipeline::new(vec![short.clone()]);
        let lax = lower_to_chain(&pipeline, &FunctionRegistry::new(), &ExecConfig::default()).unwrap();
        assert_eq!(lax.execute_all(batch()).unwrap().len(), 1);

        pipeline.config = Some(PipelineConfig {
            filter_policy: Some(FilterLengthPolicy::Strict),
        });
        let strict = lower_to_chain(&pipeline, &FunctionRegistry::new(), &ExecConfig::default()).unwrap();
        assert_eq!(
            strict.execute_all(batch()).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );

        let step_override = Pipeline {
            config: pipeline.config.clone(),
            steps: vec![Step::Filter {
                flags: vec![true],
                policy: Some(FilterLengthPolicy::Truncate),
            }],
        };
        let chain = lower_to_chain(&step_override, &FunctionRegistry::new(), &ExecConfig::default()).unwrap();
        assert!(chain.execute_all(batch()).is_ok());
    }

    #[test]
    fn compute_uses_registry_and_alias() {
        let mut reg = FunctionRegistry::new();
        reg.register("tag_len", |r: &rowchain_core::row::Row| {
            Ok(rowchain_core::types::Cell::Int(r.get(1)?.as_text()?.len() as i64))
        });
        let pipeline = Pipeline::new(vec![Step::Compute {
            function: "tag_len".into(),
            alias: Some("n".into()),
        }]);
        let chain = lower_to_chain(&pipeline, &reg, &ExecConfig::default()).unwrap();
        let out = chain.execute_all(batch()).unwrap();
        assert_eq!(out.get(0).unwrap(), &row![1, "b", 1]);

        let schema = rowchain_core::schema::Schema::infer(&batch());
        let planned = chain.plan(&schema).unwrap();
        assert_eq!(planned.fields[2].name, "n");
    }
}
