use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ripple_core::text::{TextChangeRange, TextSpan};
use ripple_parser::{reparse, Parser};

// A module of about a hundred lines touching most statement and type forms.
const MODULE_SOURCE: &str = r#"
import { EventEmitter } from 'events';
import type { Logger } from './logger';

export interface Job<T = unknown> {
    readonly id: string;
    payload: T;
    attempts: number;
    runAt?: Date;
}

export type JobState = 'queued' | 'running' | 'done' | 'failed';
type Handler<T> = (job: Job<T>) => Promise<void>;

export enum Priority {
    Low = 1,
    Normal = Low << 1,
    High = Normal << 1,
}

export class Queue<T> extends EventEmitter {
    private readonly jobs = new Map<string, Job<T>>();
    private states: Record<string, JobState> = {};
    #running = 0;

    constructor(private readonly logger: Logger, private concurrency = 4) {
        super();
    }

    push(payload: T, priority: Priority = Priority.Normal): Job<T> {
        const job: Job<T> = { id: `${Date.now()}-${this.jobs.size}`, payload, attempts: 0 };
        this.jobs.set(job.id, job);
        this.states[job.id] = 'queued';
        this.emit('queued', job, priority);
        return job;
    }

    async drain(handler: Handler<T>): Promise<number> {
        let finished = 0;
        for (const [id, job] of this.jobs) {
            if (this.states[id] !== 'queued') continue;
            while (this.#running >= this.concurrency) {
                await new Promise((resolve) => setTimeout(resolve, 10));
            }
            this.#running++;
            try {
                await handler(job);
                this.states[id] = 'done';
                finished += 1;
            } catch (error) {
                job.attempts++;
                this.states[id] = job.attempts > 3 ? 'failed' : 'queued';
                this.logger.warn(`job ${id} failed`, error as Error);
            } finally {
                this.#running--;
            }
        }
        return finished;
    }

    get pending(): number {
        return Object.values(this.states).filter((s) => s === 'queued').length;
    }
}

export function retryable<T extends { attempts: number }>(job: T, limit = 3): job is T & { attempts: 0 } {
    return job.attempts < limit;
}

export const summarize = (states: Record<string, JobState>) =>
    Object.entries(states).reduce<Record<JobState, number>>(
        (acc, [, state]) => ({ ...acc, [state]: (acc[state] ?? 0) + 1 }),
        {} as Record<JobState, number>,
    );

namespace Internal {
    export function label(state: JobState): string {
        switch (state) {
            case 'queued':
                return 'waiting';
            case 'running':
                return 'busy';
            default:
                return state;
        }
    }
}

export default Queue;
"#;

const VIEW_SOURCE: &str = r#"
import { useState } from 'react';

export function Counter({ start = 0, label }: { start?: number; label: string }) {
    const [count, setCount] = useState(start);
    return (
        <section className="counter">
            <h2>{label}</h2>
            <button onClick={() => setCount((c) => c - 1)} disabled={count <= 0}>-</button>
            <span data-count={count}>{count}</span>
            <button onClick={() => setCount((c) => c + 1)}>+</button>
            {count > 10 ? <p>That is a lot.</p> : <>Keep going</>}
        </section>
    );
}
"#;

fn bench_full_parse(c: &mut Criterion) {
    c.bench_function("parse_module", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let file = Parser::new(&arena, "queue.ts", black_box(MODULE_SOURCE)).parse_source_file();
            black_box(file.node_count);
        });
    });

    c.bench_function("parse_markup", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let file = Parser::new(&arena, "counter.tsx", black_box(VIEW_SOURCE)).parse_source_file();
            black_box(file.node_count);
        });
    });
}

fn bench_reparse(c: &mut Criterion) {
    let old_arena = Bump::new();
    let old = Parser::new(&old_arena, "queue.ts", MODULE_SOURCE).parse_source_file();

    // Rename a local inside `drain`, as an editor keystroke would.
    let start = MODULE_SOURCE.find("finished += 1").expect("edit point");
    let new_text = MODULE_SOURCE.replacen("finished += 1", "finishedCount += 1", 1);
    let change = TextChangeRange::new(TextSpan::new(start as u32, 8), 13);

    c.bench_function("reparse_after_rename", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let file = reparse(&arena, &old, black_box(&new_text), change).expect("consistent change");
            black_box(file.node_count);
        });
    });
}

criterion_group!(benches, bench_full_parse, bench_reparse);
criterion_main!(benches);
