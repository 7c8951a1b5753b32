// Property tests for the quantified control laws:
// - a handler is transparent for computations that never suspend
// - an aborting body's value is the handler's value
// - resuming once is observationally the same as never suspending
// - multi-shot resumption agrees with running the context separately

use delimcc::{Body, Control, Engine, Frame, Prompt, Value};
use proptest::prelude::*;

/// The linear context `x => a*x + b`, the arbitrary pure work the
/// compiler would lift into a frame around a suspension point.
fn linear_frame(a: i64, b: i64) -> Frame {
    Frame::new(move |_, v| {
        Control::done(Value::int(v.as_int().unwrap().wrapping_mul(a).wrapping_add(b)))
    })
}

fn linear(a: i64, b: i64, x: i64) -> i64 {
    x.wrapping_mul(a).wrapping_add(b)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn handler_is_transparent_for_pure_thunks(n in any::<i64>()) {
        let mut engine = Engine::new();
        let prompt = engine.fresh_prompt();
        let result = engine
            .run(|engine| engine.handle(prompt, move |_| Control::done(Value::int(n))))
            .unwrap();
        prop_assert_eq!(result, Value::int(n));
    }

    #[test]
    fn aborting_body_decides_the_result(n in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        // handle(p, f(suspend(p, _ => n))) == n for every context f
        let mut engine = Engine::new();
        let prompt = engine.fresh_prompt();
        let result = engine
            .run(|engine| {
                engine.handle(prompt, move |engine| {
                    let suspended =
                        engine.suspend(prompt, Body::new(move |_, _| Control::done(Value::int(n))));
                    engine.push(suspended, linear_frame(a, b))
                })
            })
            .unwrap();
        prop_assert_eq!(result, Value::int(n));
    }

    #[test]
    fn single_resume_is_observationally_pure(v in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        // handle(p, f(suspend(p, k => k(v)))) == f(v)
        let mut engine = Engine::new();
        let prompt = engine.fresh_prompt();
        let result = engine
            .run(|engine| {
                engine.handle(prompt, move |engine| {
                    let suspended = engine.suspend(
                        prompt,
                        Body::new(move |engine, k| engine.resume(&k, Value::int(v))),
                    );
                    engine.push(suspended, linear_frame(a, b))
                })
            })
            .unwrap();
        prop_assert_eq!(result, Value::int(linear(a, b, v)));
    }

    #[test]
    fn multi_shot_agrees_with_separate_contexts(
        v1 in any::<i64>(),
        v2 in any::<i64>(),
        a in any::<i64>(),
        b in any::<i64>(),
    ) {
        // body resumes twice under a combiner: c(f(v1), f(v2))
        let mut engine = Engine::new();
        let prompt = engine.fresh_prompt();
        let result = engine
            .run(|engine| {
                engine.handle(prompt, move |engine| {
                    let suspended = engine.suspend(
                        prompt,
                        Body::new(move |engine, k| {
                            let first = engine.resume(&k, Value::int(v1)).into_value().unwrap();
                            let second = engine.resume(&k, Value::int(v2)).into_value().unwrap();
                            Control::done(Value::int(
                                first.as_int().unwrap().wrapping_add(second.as_int().unwrap()),
                            ))
                        }),
                    );
                    engine.push(suspended, linear_frame(a, b))
                })
            })
            .unwrap();
        let expected = linear(a, b, v1).wrapping_add(linear(a, b, v2));
        prop_assert_eq!(result, Value::int(expected));
    }

    #[test]
    fn suspension_crosses_any_number_of_boundaries(depth in 0usize..6, v in any::<i64>()) {
        // handle(t, handle(q1, ... handle(qd, suspend(t, k => k(v))))) == v
        fn nest(engine: &mut Engine, depth: usize, target: Prompt, v: i64) -> Control {
            if depth == 0 {
                engine.suspend(
                    target,
                    Body::new(move |engine, k| engine.resume(&k, Value::int(v))),
                )
            } else {
                let inner = engine.fresh_prompt();
                engine.handle(inner, move |engine| nest(engine, depth - 1, target, v))
            }
        }

        let mut engine = Engine::new();
        let target = engine.fresh_prompt();
        let result = engine
            .run(|engine| engine.handle(target, move |engine| nest(engine, depth, target, v)))
            .unwrap();
        prop_assert_eq!(result, Value::int(v));
    }

    #[test]
    fn fresh_prompts_never_collide(count in 1usize..64) {
        let mut engine = Engine::new();
        let prompts: Vec<Prompt> = (0..count).map(|_| engine.fresh_prompt()).collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in &prompts[i + 1..] {
                prop_assert_ne!(a, b);
            }
            prop_assert!(*a > Prompt::TOP_LEVEL);
        }
    }
}
